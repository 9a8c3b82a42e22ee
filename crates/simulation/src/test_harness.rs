//! # TestBoard — headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` for driving the board through
//! pointer gestures and events without a window or renderer.

use bevy::app::App;
use bevy::prelude::*;

use crate::capacity::{CapacityPolicy, PurchaseEvent};
use crate::grid::{PaintGrid, Zone, ZoneTotals};
use crate::invariants::BoardViolations;
use crate::painter::{self, Painter};
use crate::reset::ClearBoardEvent;
use crate::SimulationPlugin;

pub struct TestBoard {
    app: App,
}

impl TestBoard {
    /// Fresh board under the fixed-limit policy.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        app.update();
        Self { app }
    }

    /// Fresh board under the stock policy (both zones start at zero).
    pub fn with_stock() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);
        app.insert_resource(CapacityPolicy::stock());
        app.update();
        Self { app }
    }

    pub fn tick(&mut self) {
        self.app.update();
    }

    fn with_board<R>(
        &mut self,
        f: impl FnOnce(&mut Painter, &mut PaintGrid, &mut CapacityPolicy) -> R,
    ) -> R {
        let world = self.app.world_mut();
        world.resource_scope(|world, mut painter: Mut<Painter>| {
            world.resource_scope(|world, mut grid: Mut<PaintGrid>| {
                world.resource_scope(|_world, mut policy: Mut<CapacityPolicy>| {
                    f(&mut painter, &mut grid, &mut policy)
                })
            })
        })
    }

    // -----------------------------------------------------------------------
    // Pointer gestures
    // -----------------------------------------------------------------------

    pub fn press(&mut self, x: usize, y: usize) -> bool {
        self.with_board(|painter, grid, policy| painter.pointer_down(grid, policy, x, y))
    }

    pub fn drag_to(&mut self, x: usize, y: usize) -> bool {
        self.with_board(|painter, grid, policy| painter.pointer_over(grid, policy, x, y))
    }

    pub fn release(&mut self) {
        self.with_board(|painter, _, _| painter.pointer_up());
    }

    pub fn right_click(&mut self, x: usize, y: usize) -> bool {
        self.with_board(|_, grid, policy| painter::erase_at(grid, policy, x, y))
    }

    // -----------------------------------------------------------------------
    // Collaborator events
    // -----------------------------------------------------------------------

    /// Fire a purchase confirmation and run a frame so the system applies it.
    pub fn purchase(&mut self, zone: Zone, amount: u32) {
        self.app.world_mut().send_event(PurchaseEvent { zone, amount });
        self.app.update();
    }

    /// Fire the reset control and run a frame.
    pub fn clear_board(&mut self) {
        self.app.world_mut().send_event(ClearBoardEvent);
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Assertion helpers
    // -----------------------------------------------------------------------

    pub fn counts(&self) -> ZoneTotals {
        self.app.world().resource::<PaintGrid>().counts()
    }

    pub fn is_painted(&self, x: usize, y: usize) -> bool {
        self.app.world().resource::<PaintGrid>().is_painted(x, y)
    }

    pub fn remaining(&self, zone: Zone) -> u32 {
        let world = self.app.world();
        let grid = world.resource::<PaintGrid>();
        world.resource::<CapacityPolicy>().remaining(grid, zone)
    }

    pub fn is_painting(&self) -> bool {
        self.app.world().resource::<Painter>().is_painting()
    }

    pub fn assert_invariants_clean(&self) {
        let v = self.app.world().resource::<BoardViolations>();
        assert_eq!(v.over_limit, 0, "zone over its configured limit");
        assert_eq!(v.stock_drift, 0, "stock conservation violated");
    }
}
