use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::capacity::CapacityPolicy;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "ZonePaint".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    // ZONEPAINT_MODE=stock runs the board with the purchasable-stock policy;
    // anything else keeps the fixed per-zone limits.
    if std::env::var("ZONEPAINT_MODE").as_deref() == Ok("stock") {
        app.insert_resource(CapacityPolicy::stock());
        info!("capacity mode: purchasable stock");
    } else {
        info!("capacity mode: fixed limits");
    }

    app.run();
}
