use bevy::prelude::*;

use crate::capacity::CapacityPolicy;
use crate::grid::PaintGrid;

/// Fired by the UI's reset button. Wipes every painted block and, in the
/// stock variant, credits each zone by the number of blocks it lost.
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct ClearBoardEvent;

pub fn apply_board_clear(
    mut events: EventReader<ClearBoardEvent>,
    mut grid: ResMut<PaintGrid>,
    mut policy: ResMut<CapacityPolicy>,
) {
    for _ in events.read() {
        let erased = grid.clear();
        policy.on_reset(erased);
        if erased.total() > 0 {
            info!(
                "board cleared: {} side and {} middle blocks removed",
                erased.side, erased.middle
            );
        }
    }
}
