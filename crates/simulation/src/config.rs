pub const GRID_WIDTH: usize = 100;
pub const GRID_HEIGHT: usize = 50;
pub const CELL_SIZE: f32 = 12.0;
pub const WORLD_WIDTH: f32 = GRID_WIDTH as f32 * CELL_SIZE;
pub const WORLD_HEIGHT: f32 = GRID_HEIGHT as f32 * CELL_SIZE;

/// Columns [MIDDLE_START_X, MIDDLE_END_X) form the middle zone; every other
/// column belongs to the side zone. Fixed configuration, not derived.
pub const MIDDLE_START_X: usize = 20;
pub const MIDDLE_END_X: usize = 80;

/// Per-zone ceilings for the fixed-limit capacity variant.
pub const SIDE_BLOCK_LIMIT: u32 = 10;
pub const MIDDLE_BLOCK_LIMIT: u32 = 20;

/// Blocks credited to a zone by one confirmed purchase (stock variant).
pub const STOCK_PACK_SIZE: u32 = 10;
