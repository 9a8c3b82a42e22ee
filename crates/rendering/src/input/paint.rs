//! Pointer-event dispatch for drag painting.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::capacity::CapacityPolicy;
use simulation::grid::PaintGrid;
use simulation::painter::{self, Painter};

use super::cursor::CursorGridPos;

/// Returns `true` when egui wants the pointer — i.e. the cursor is over a
/// panel or egui is handling a click. World input skips those frames to
/// avoid painting underneath the UI.
fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    let ctx = contexts.ctx_mut();
    ctx.wants_pointer_input() || ctx.is_pointer_over_area()
}

/// Translates mouse state into the painter's pointer protocol.
///
/// The stroke ends on any of three triggers: release over the board
/// (`just_released` below), release anywhere else in the window (the same
/// `ButtonInput` sees the window-level event regardless of cursor position),
/// or the cursor leaving the board (`cursor.valid` goes false).
pub fn handle_paint_input(
    buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorGridPos>,
    mut contexts: EguiContexts,
    mut grid: ResMut<PaintGrid>,
    mut policy: ResMut<CapacityPolicy>,
    mut painter: ResMut<Painter>,
) {
    // Handled before the egui guard: a release over a panel must still end
    // the stroke.
    if buttons.just_released(MouseButton::Left) {
        painter.pointer_up();
    }

    if egui_wants_pointer(&mut contexts) {
        return;
    }

    if !cursor.valid {
        painter.pointer_up();
        return;
    }

    let x = cursor.grid_x as usize;
    let y = cursor.grid_y as usize;

    if buttons.just_pressed(MouseButton::Right) {
        painter::erase_at(&mut grid, &mut policy, x, y);
    }

    if buttons.just_pressed(MouseButton::Left) {
        painter.pointer_down(&mut grid, &mut policy, x, y);
    } else if buttons.pressed(MouseButton::Left) {
        painter.pointer_over(&mut grid, &mut policy, x, y);
    }
}
