use bevy::prelude::*;

use simulation::grid::PaintGrid;

/// Grid cell under the cursor this frame. `valid` is false whenever the
/// cursor is outside the window or off the board.
#[derive(Resource, Default)]
pub struct CursorGridPos {
    pub grid_x: i32,
    pub grid_y: i32,
    pub valid: bool,
}

pub fn update_cursor_grid_pos(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    grid: Res<PaintGrid>,
    mut cursor: ResMut<CursorGridPos>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };

    if let Some(screen_pos) = window.cursor_position() {
        if let Ok(world) = camera.viewport_to_world_2d(cam_transform, screen_pos) {
            let (gx, gy) = PaintGrid::world_to_grid(world.x, world.y);
            cursor.grid_x = gx;
            cursor.grid_y = gy;
            cursor.valid = gx >= 0 && gy >= 0 && grid.in_bounds(gx as usize, gy as usize);
            return;
        }
    }
    cursor.valid = false;
}
