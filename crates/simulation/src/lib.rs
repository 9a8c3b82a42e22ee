use bevy::prelude::*;

pub mod capacity;
pub mod config;
pub mod grid;
pub mod invariants;
pub mod painter;
pub mod reset;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<grid::PaintGrid>()
            .init_resource::<capacity::CapacityPolicy>()
            .init_resource::<painter::Painter>()
            .init_resource::<invariants::BoardViolations>()
            .add_event::<capacity::PurchaseEvent>()
            .add_event::<reset::ClearBoardEvent>()
            .add_systems(
                Update,
                (
                    capacity::apply_purchases,
                    reset::apply_board_clear,
                    invariants::validate_board_invariants,
                )
                    .chain(),
            );
    }
}
