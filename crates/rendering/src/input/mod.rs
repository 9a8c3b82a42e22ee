//! Input handling for the board.
//!
//! Split into sub-modules by concern:
//! - `cursor`: window cursor to grid coordinate mapping
//! - `paint`: the pointer-event system driving the drag-paint state machine

mod cursor;
mod paint;

pub use cursor::{update_cursor_grid_pos, CursorGridPos};
pub use paint::handle_paint_input;
