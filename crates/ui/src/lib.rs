use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod purchase_dialog;
pub mod status_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<purchase_dialog::PendingPurchase>()
            .add_systems(
                Update,
                (
                    status_panel::status_panel_ui,
                    purchase_dialog::purchase_dialog_ui,
                ),
            );
    }
}
