use bevy::prelude::*;

use simulation::config::{WORLD_HEIGHT, WORLD_WIDTH};

/// The whole board fits the default window, so the camera is static:
/// centered on the board, no pan or zoom.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(WORLD_WIDTH * 0.5, WORLD_HEIGHT * 0.5, 0.0),
    ));
}
