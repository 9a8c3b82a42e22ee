use bevy::prelude::*;

use simulation::config::CELL_SIZE;
use simulation::grid::{PaintGrid, Zone};

const COLOR_BACKDROP: Color = Color::srgb(0.82, 0.84, 0.86);
const COLOR_SIDE_EMPTY: Color = Color::srgb(0.93, 0.93, 0.94);
const COLOR_MIDDLE_EMPTY: Color = Color::srgb(0.98, 0.98, 0.98);
const COLOR_BLOCK: Color = Color::srgb(0.23, 0.51, 0.96);

/// Shrink each cell sprite slightly so the backdrop shows through as grid
/// lines.
const CELL_GAP: f32 = 1.0;

#[derive(Component)]
pub struct BoardCell {
    pub x: usize,
    pub y: usize,
}

pub(crate) fn cell_color(grid: &PaintGrid, x: usize, y: usize) -> Color {
    if grid.is_painted(x, y) {
        COLOR_BLOCK
    } else {
        match Zone::of_column(x) {
            Zone::Side => COLOR_SIDE_EMPTY,
            Zone::Middle => COLOR_MIDDLE_EMPTY,
        }
    }
}

/// One sprite per cell, tinted by zone. 100x50 cells is small enough that
/// individual sprites render comfortably without batching tricks.
pub fn spawn_board(mut commands: Commands, grid: Res<PaintGrid>) {
    commands.insert_resource(ClearColor(COLOR_BACKDROP));
    for y in 0..grid.height {
        for x in 0..grid.width {
            let (wx, wy) = PaintGrid::grid_to_world(x, y);
            commands.spawn((
                Sprite::from_color(
                    cell_color(&grid, x, y),
                    Vec2::splat(CELL_SIZE - CELL_GAP),
                ),
                Transform::from_xyz(wx, wy, 0.0),
                BoardCell { x, y },
            ));
        }
    }
}

/// Recolor every cell from the grid. Gated on grid change detection in the
/// plugin, so each mutation reaches the screen on the same frame it happens.
pub fn update_cell_colors(grid: Res<PaintGrid>, mut cells: Query<(&BoardCell, &mut Sprite)>) {
    for (cell, mut sprite) in &mut cells {
        sprite.color = cell_color(&grid, cell.x, cell.y);
    }
}
