//! Runtime invariant validation for the board state.
//!
//! Runs whenever the grid or policy changed and logs warnings when a
//! violation is detected. Violation counts are tracked in a resource so
//! integration tests can assert that legal event sequences stay clean.
//!
//! Validated invariants:
//! 1. **Fixed limits**: no zone holds more blocks than its ceiling.
//! 2. **Stock conservation**: for each zone,
//!    `available + painted == purchased` (initial stock is zero).

use bevy::prelude::*;

use crate::capacity::CapacityPolicy;
use crate::grid::{PaintGrid, Zone};

/// Number of invariant violations seen during the last validation pass.
#[derive(Resource, Default, Debug)]
pub struct BoardViolations {
    /// Zones whose painted count exceeds the configured ceiling.
    pub over_limit: u32,
    /// Zones where available + painted drifted from the purchase tally.
    pub stock_drift: u32,
}

pub fn validate_board_invariants(
    grid: Res<PaintGrid>,
    policy: Res<CapacityPolicy>,
    mut violations: ResMut<BoardViolations>,
) {
    if !grid.is_changed() && !policy.is_changed() {
        return;
    }

    violations.over_limit = 0;
    violations.stock_drift = 0;

    for zone in [Zone::Side, Zone::Middle] {
        let painted = grid.count_in_zone(zone);
        match &*policy {
            CapacityPolicy::FixedLimit { limits } => {
                if painted > limits.get(zone) {
                    warn!(
                        "invariant violation: {} zone holds {} blocks, limit is {}",
                        zone.label(),
                        painted,
                        limits.get(zone)
                    );
                    violations.over_limit += 1;
                }
            }
            CapacityPolicy::Stock {
                available,
                purchased,
            } => {
                if available.get(zone) + painted != purchased.get(zone) {
                    warn!(
                        "invariant violation: {} zone has {} available + {} painted, but {} purchased",
                        zone.label(),
                        available.get(zone),
                        painted,
                        purchased.get(zone)
                    );
                    violations.stock_drift += 1;
                }
            }
        }
    }
}
