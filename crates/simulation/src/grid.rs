use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH, MIDDLE_END_X, MIDDLE_START_X};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Side,
    Middle,
}

impl Zone {
    /// Zone membership depends only on the column. Every capacity check and
    /// the grid's cached per-block tag go through this single function.
    #[inline]
    pub fn of_column(x: usize) -> Zone {
        if (MIDDLE_START_X..MIDDLE_END_X).contains(&x) {
            Zone::Middle
        } else {
            Zone::Side
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::Side => "Side",
            Zone::Middle => "Middle",
        }
    }
}

/// One counter per zone. Reused for stock balances, fixed limits, purchase
/// tallies, and clear-refund counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneTotals {
    pub side: u32,
    pub middle: u32,
}

impl ZoneTotals {
    pub fn new(side: u32, middle: u32) -> Self {
        Self { side, middle }
    }

    #[inline]
    pub fn get(self, zone: Zone) -> u32 {
        match zone {
            Zone::Side => self.side,
            Zone::Middle => self.middle,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, zone: Zone) -> &mut u32 {
        match zone {
            Zone::Side => &mut self.side,
            Zone::Middle => &mut self.middle,
        }
    }

    pub fn add(&mut self, zone: Zone, n: u32) {
        let slot = self.get_mut(zone);
        *slot = slot.saturating_add(n);
    }

    pub fn total(self) -> u32 {
        self.side + self.middle
    }
}

/// The set of painted blocks. Dense storage keyed by coordinate, so no two
/// blocks can ever share a cell; each painted cell caches its zone tag.
#[derive(Resource, Serialize, Deserialize)]
pub struct PaintGrid {
    cells: Vec<Option<Zone>>,
    pub width: usize,
    pub height: usize,
}

impl Default for PaintGrid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl PaintGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![None; width * height],
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn zone_at(&self, x: usize, y: usize) -> Option<Zone> {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn is_painted(&self, x: usize, y: usize) -> bool {
        self.zone_at(x, y).is_some()
    }

    /// Paint the cell, tagging it with its column's zone. Returns `false`
    /// without mutating when the cell is already painted.
    pub fn paint(&mut self, x: usize, y: usize) -> bool {
        let idx = self.index(x, y);
        if self.cells[idx].is_some() {
            return false;
        }
        self.cells[idx] = Some(Zone::of_column(x));
        true
    }

    /// Remove the block at (x, y), returning its zone, or `None` if the cell
    /// was empty.
    pub fn erase(&mut self, x: usize, y: usize) -> Option<Zone> {
        let idx = self.index(x, y);
        self.cells[idx].take()
    }

    /// Live count of painted blocks in a zone. Always re-derived from the
    /// cells, never cached, so it cannot drift.
    pub fn count_in_zone(&self, zone: Zone) -> u32 {
        self.cells.iter().filter(|c| **c == Some(zone)).count() as u32
    }

    pub fn counts(&self) -> ZoneTotals {
        let mut totals = ZoneTotals::default();
        for cell in self.cells.iter().flatten() {
            totals.add(*cell, 1);
        }
        totals
    }

    /// Empty the board, returning how many blocks of each zone were removed
    /// so callers can refund stock.
    pub fn clear(&mut self) -> ZoneTotals {
        let erased = self.counts();
        self.cells.fill(None);
        erased
    }

    pub fn iter_painted(&self) -> impl Iterator<Item = (usize, usize, Zone)> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|zone| (idx % self.width, idx / self.width, zone))
        })
    }

    pub fn world_to_grid(world_x: f32, world_y: f32) -> (i32, i32) {
        let gx = (world_x / CELL_SIZE).floor() as i32;
        let gy = (world_y / CELL_SIZE).floor() as i32;
        (gx, gy)
    }

    pub fn grid_to_world(gx: usize, gy: usize) -> (f32, f32) {
        let wx = gx as f32 * CELL_SIZE + CELL_SIZE * 0.5;
        let wy = gy as f32 * CELL_SIZE + CELL_SIZE * 0.5;
        (wx, wy)
    }
}
