//! Click-and-drag painting.
//!
//! The `Painter` resource is the interaction state machine: a press that
//! paints arms a stroke, hover while armed keeps painting, and any release
//! (over the board, elsewhere in the window, or by leaving the board) ends
//! it. Right-click erases and never touches the stroke state.
//!
//! All rejected gestures are silent no-ops — painting an occupied cell,
//! painting with the zone exhausted, and erasing an empty cell do nothing
//! and report `false` rather than failing.

use bevy::prelude::*;

use crate::capacity::CapacityPolicy;
use crate::grid::{PaintGrid, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintPhase {
    #[default]
    Idle,
    Painting,
}

#[derive(Resource, Debug, Default)]
pub struct Painter {
    pub phase: PaintPhase,
}

impl Painter {
    /// Primary-button press on a cell. Arms the stroke only when the press
    /// itself paints a block; an occupied cell or an exhausted zone leaves
    /// the machine idle.
    pub fn pointer_down(
        &mut self,
        grid: &mut PaintGrid,
        policy: &mut CapacityPolicy,
        x: usize,
        y: usize,
    ) -> bool {
        if try_paint(grid, policy, x, y) {
            self.phase = PaintPhase::Painting;
            true
        } else {
            false
        }
    }

    /// Hover over a cell. Paints only while a stroke is armed.
    pub fn pointer_over(
        &mut self,
        grid: &mut PaintGrid,
        policy: &mut CapacityPolicy,
        x: usize,
        y: usize,
    ) -> bool {
        if self.phase != PaintPhase::Painting {
            return false;
        }
        try_paint(grid, policy, x, y)
    }

    /// End the stroke. Idempotent.
    pub fn pointer_up(&mut self) {
        self.phase = PaintPhase::Idle;
    }

    pub fn is_painting(&self) -> bool {
        self.phase == PaintPhase::Painting
    }
}

/// Paint one block if the cell is free and its zone has capacity, committing
/// the debit in the same call.
pub fn try_paint(
    grid: &mut PaintGrid,
    policy: &mut CapacityPolicy,
    x: usize,
    y: usize,
) -> bool {
    if !grid.in_bounds(x, y) || grid.is_painted(x, y) {
        return false;
    }
    let zone = Zone::of_column(x);
    if !policy.can_paint(grid, zone) {
        return false;
    }
    grid.paint(x, y);
    policy.on_paint(zone);
    true
}

/// Remove the block at (x, y) and credit its zone.
pub fn erase_at(
    grid: &mut PaintGrid,
    policy: &mut CapacityPolicy,
    x: usize,
    y: usize,
) -> bool {
    if !grid.in_bounds(x, y) {
        return false;
    }
    match grid.erase(x, y) {
        Some(zone) => {
            policy.on_erase(zone);
            true
        }
        None => false,
    }
}
