//! Per-zone capacity enforcement.
//!
//! Two interchangeable policies decide whether a zone can take another block:
//! a fixed ceiling re-derived from the live grid count, and a consumable
//! stock balance debited on paint and credited on erase, reset, and purchase.
//! The variant is chosen once at startup and never switched mid-session.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{MIDDLE_BLOCK_LIMIT, SIDE_BLOCK_LIMIT};
use crate::grid::{PaintGrid, Zone, ZoneTotals};

#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityPolicy {
    /// Hard per-zone ceiling on simultaneously painted blocks. The count is
    /// always read from the grid, so the limit cannot drift.
    FixedLimit { limits: ZoneTotals },
    /// Consumable per-zone balance. Starts empty; the purchase dialog is the
    /// only inflow besides refunds.
    Stock {
        available: ZoneTotals,
        /// Running tally of everything ever credited by purchases. Feeds the
        /// conservation invariant: available + painted == purchased.
        purchased: ZoneTotals,
    },
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::fixed_limit()
    }
}

impl CapacityPolicy {
    pub fn fixed_limit() -> Self {
        CapacityPolicy::FixedLimit {
            limits: ZoneTotals::new(SIDE_BLOCK_LIMIT, MIDDLE_BLOCK_LIMIT),
        }
    }

    pub fn stock() -> Self {
        CapacityPolicy::Stock {
            available: ZoneTotals::default(),
            purchased: ZoneTotals::default(),
        }
    }

    /// Whether one more block may be painted in `zone` right now.
    pub fn can_paint(&self, grid: &PaintGrid, zone: Zone) -> bool {
        match self {
            CapacityPolicy::FixedLimit { limits } => {
                grid.count_in_zone(zone) < limits.get(zone)
            }
            CapacityPolicy::Stock { available, .. } => available.get(zone) > 0,
        }
    }

    /// Commit a successful paint. Must follow a passing `can_paint` within
    /// the same system run.
    pub fn on_paint(&mut self, zone: Zone) {
        if let CapacityPolicy::Stock { available, .. } = self {
            let slot = available.get_mut(zone);
            *slot = slot.saturating_sub(1);
        }
    }

    /// Credit back one block removed from `zone`.
    pub fn on_erase(&mut self, zone: Zone) {
        if let CapacityPolicy::Stock { available, .. } = self {
            available.add(zone, 1);
        }
    }

    /// Credit back everything a board clear removed.
    pub fn on_reset(&mut self, erased: ZoneTotals) {
        if let CapacityPolicy::Stock { available, .. } = self {
            available.add(Zone::Side, erased.side);
            available.add(Zone::Middle, erased.middle);
        }
    }

    /// Purchase inflow. No-op for the fixed-limit variant, which has nothing
    /// to buy.
    pub fn credit(&mut self, zone: Zone, amount: u32) {
        if let CapacityPolicy::Stock {
            available,
            purchased,
        } = self
        {
            available.add(zone, amount);
            purchased.add(zone, amount);
        }
    }

    /// How many more blocks `zone` can take, for the status panel.
    pub fn remaining(&self, grid: &PaintGrid, zone: Zone) -> u32 {
        match self {
            CapacityPolicy::FixedLimit { limits } => {
                limits.get(zone).saturating_sub(grid.count_in_zone(zone))
            }
            CapacityPolicy::Stock { available, .. } => available.get(zone),
        }
    }

    /// Configured ceiling for display, when the variant has one.
    pub fn limit(&self, zone: Zone) -> Option<u32> {
        match self {
            CapacityPolicy::FixedLimit { limits } => Some(limits.get(zone)),
            CapacityPolicy::Stock { .. } => None,
        }
    }
}

/// Fired by the purchase dialog on confirmation. The dialog owns the pack
/// size; the policy just credits what the event carries.
#[derive(Event, Debug, Clone, Copy)]
pub struct PurchaseEvent {
    pub zone: Zone,
    pub amount: u32,
}

pub fn apply_purchases(
    mut events: EventReader<PurchaseEvent>,
    mut policy: ResMut<CapacityPolicy>,
) {
    for ev in events.read() {
        policy.credit(ev.zone, ev.amount);
        info!("purchased {} blocks for the {} zone", ev.amount, ev.zone.label());
    }
}
