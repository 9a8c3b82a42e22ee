//! Integration tests driving the board through the `TestBoard` harness:
//! pointer gestures plus the purchase and reset events, end to end.

use crate::config::{GRID_HEIGHT, GRID_WIDTH, STOCK_PACK_SIZE};
use crate::grid::{Zone, ZoneTotals};
use crate::test_harness::TestBoard;

// ===========================================================================
// Harness bootstrap
// ===========================================================================

#[test]
fn fresh_board_is_empty() {
    let board = TestBoard::new();
    assert_eq!(board.counts().total(), 0);
    assert!(!board.is_painting());
}

#[test]
fn fresh_board_has_expected_dimensions() {
    let board = TestBoard::new();
    assert!(!board.is_painted(0, 0));
    assert!(!board.is_painted(GRID_WIDTH - 1, GRID_HEIGHT - 1));
}

#[test]
fn fresh_board_defaults_to_fixed_limits() {
    let board = TestBoard::new();
    assert_eq!(board.remaining(Zone::Side), 10);
    assert_eq!(board.remaining(Zone::Middle), 20);
}

#[test]
fn stock_board_starts_with_nothing_available() {
    let board = TestBoard::with_stock();
    assert_eq!(board.remaining(Zone::Side), 0);
    assert_eq!(board.remaining(Zone::Middle), 0);
}

// ===========================================================================
// Fixed-limit ceiling
// ===========================================================================

#[test]
fn side_zone_fills_to_ten_then_rejects() {
    let mut board = TestBoard::new();
    for x in 0..10 {
        assert!(board.press(x, 0), "block {x} should place");
        board.release();
    }
    assert!(!board.press(10, 0), "11th side block must be a no-op");
    assert!(!board.is_painting(), "rejected press must not arm a stroke");
    assert_eq!(board.counts(), ZoneTotals::new(10, 0));

    board.tick();
    board.assert_invariants_clean();
}

#[test]
fn zones_fill_independently() {
    let mut board = TestBoard::new();
    for x in 0..10 {
        assert!(board.press(x, 0));
        board.release();
    }
    assert!(board.press(50, 0), "middle zone unaffected by full side zone");
}

// ===========================================================================
// Stock policy: purchase, debit, refund
// ===========================================================================

#[test]
fn empty_stock_rejects_until_purchase() {
    let mut board = TestBoard::with_stock();

    assert!(!board.press(50, 0));
    assert_eq!(board.counts().total(), 0);
    assert_eq!(board.remaining(Zone::Middle), 0);

    board.purchase(Zone::Middle, STOCK_PACK_SIZE);
    assert_eq!(board.remaining(Zone::Middle), 10);

    assert!(board.press(50, 0));
    board.release();
    assert_eq!(board.remaining(Zone::Middle), 9);

    board.assert_invariants_clean();
}

#[test]
fn erase_refunds_the_debited_zone() {
    let mut board = TestBoard::with_stock();
    board.purchase(Zone::Side, STOCK_PACK_SIZE);

    assert!(board.press(5, 5));
    board.release();
    assert_eq!(board.remaining(Zone::Side), 9);

    assert!(board.right_click(5, 5));
    assert!(!board.is_painted(5, 5));
    assert_eq!(board.remaining(Zone::Side), 10);

    board.tick();
    board.assert_invariants_clean();
}

#[test]
fn purchases_accumulate_across_confirmations() {
    let mut board = TestBoard::with_stock();
    board.purchase(Zone::Middle, STOCK_PACK_SIZE);
    board.purchase(Zone::Middle, STOCK_PACK_SIZE);
    assert_eq!(board.remaining(Zone::Middle), 20);
    board.assert_invariants_clean();
}

// ===========================================================================
// Drag-paint stroke
// ===========================================================================

#[test]
fn drag_paints_every_cell_on_the_path() {
    let mut board = TestBoard::new();

    assert!(board.press(5, 5));
    assert!(board.drag_to(5, 6));
    assert!(board.drag_to(5, 7));
    assert_eq!(board.counts().total(), 3);

    board.release();
    assert!(!board.drag_to(5, 8), "hover after release paints nothing");
    assert_eq!(board.counts().total(), 3);
}

#[test]
fn drag_crossing_the_zone_boundary_debits_both_zones() {
    let mut board = TestBoard::with_stock();
    board.purchase(Zone::Side, STOCK_PACK_SIZE);
    board.purchase(Zone::Middle, STOCK_PACK_SIZE);

    assert!(board.press(19, 0));
    assert!(board.drag_to(20, 0));
    board.release();

    assert_eq!(board.remaining(Zone::Side), 9);
    assert_eq!(board.remaining(Zone::Middle), 9);
    board.assert_invariants_clean();
}

#[test]
fn drag_through_exhausted_zone_resumes_on_the_far_side() {
    let mut board = TestBoard::with_stock();
    board.purchase(Zone::Side, STOCK_PACK_SIZE);

    // Stroke enters the middle zone with no stock: those cells are skipped,
    // the stroke itself stays armed.
    assert!(board.press(19, 0));
    assert!(!board.drag_to(20, 0));
    assert!(board.is_painting());
    assert!(!board.is_painted(20, 0));

    // Back over side territory the same stroke paints again.
    assert!(board.drag_to(18, 0));
    board.release();
    assert_eq!(board.counts(), ZoneTotals::new(2, 0));
}

// ===========================================================================
// Reset control
// ===========================================================================

#[test]
fn reset_clears_and_refunds_everything() {
    let mut board = TestBoard::with_stock();
    board.purchase(Zone::Side, STOCK_PACK_SIZE);
    board.purchase(Zone::Middle, STOCK_PACK_SIZE);

    for x in 0..3 {
        assert!(board.press(x, 0));
        board.release();
    }
    for x in 40..44 {
        assert!(board.press(x, 0));
        board.release();
    }
    assert_eq!(board.counts(), ZoneTotals::new(3, 4));

    board.clear_board();
    assert_eq!(board.counts().total(), 0);
    assert_eq!(board.remaining(Zone::Side), 10);
    assert_eq!(board.remaining(Zone::Middle), 10);
    board.assert_invariants_clean();
}

#[test]
fn reset_under_fixed_limits_reopens_the_zone() {
    let mut board = TestBoard::new();
    for x in 0..10 {
        assert!(board.press(x, 0));
        board.release();
    }
    assert!(!board.press(10, 0));

    board.clear_board();
    assert_eq!(board.counts().total(), 0);
    assert!(board.press(10, 0));
}

#[test]
fn double_reset_does_not_double_refund() {
    let mut board = TestBoard::with_stock();
    board.purchase(Zone::Side, STOCK_PACK_SIZE);
    assert!(board.press(0, 0));
    board.release();

    board.clear_board();
    board.clear_board();
    assert_eq!(board.remaining(Zone::Side), 10);
    board.assert_invariants_clean();
}

// ===========================================================================
// Resource wiring
// ===========================================================================

#[test]
fn inserted_stock_policy_replaces_the_default() {
    let board = TestBoard::with_stock();
    assert_eq!(board.remaining(Zone::Side), 0, "not the fixed-limit default");
}

#[test]
fn paint_survives_frames() {
    let mut board = TestBoard::new();
    assert!(board.press(3, 3));
    board.release();
    board.tick();
    board.tick();
    assert!(board.is_painted(3, 3));
    assert_eq!(board.counts().get(Zone::Side), 1);
}
