use bevy::prelude::*;

pub mod board_render;
pub mod camera;
pub mod input;

use input::CursorGridPos;
use simulation::grid::PaintGrid;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorGridPos>()
            .add_systems(Startup, (camera::setup_camera, board_render::spawn_board))
            .add_systems(
                Update,
                (
                    input::update_cursor_grid_pos,
                    input::handle_paint_input,
                    board_render::update_cell_colors.run_if(resource_changed::<PaintGrid>),
                )
                    .chain(),
            );
    }
}
