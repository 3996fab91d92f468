//! Tests for board addressing and the snapshot accessor.

use std::collections::HashSet;
use strictly_abalone::{Board, Cell, GridCoord, HexAddr, Side, SIDE_MARBLES};

#[test]
fn test_every_address_maps_inside_the_hexagon() {
    let board = Board::new();
    for addr in HexAddr::all() {
        let at = addr.to_grid();
        assert!(at.in_hexagon(), "{addr} mapped to dead cell {at}");
        assert_ne!(board.get(at), Cell::OutOfPlay, "{addr}");
    }
}

#[test]
fn test_mapping_is_injective() {
    let mut seen = HashSet::new();
    let mut total = 0;
    for addr in HexAddr::all() {
        seen.insert(addr.to_grid());
        total += 1;
    }
    assert_eq!(total, 61);
    assert_eq!(seen.len(), total);
}

#[test]
fn test_mapping_round_trips() {
    for addr in HexAddr::all() {
        assert_eq!(addr.to_grid().hex(), Some(addr));
    }
}

#[test]
fn test_dead_cells_have_no_address() {
    assert_eq!(GridCoord::new(0, 5).hex(), None);
    assert_eq!(GridCoord::new(8, 0).hex(), None);
    assert_eq!(GridCoord::new(9, 4).hex(), None);
}

#[test]
fn test_initial_board_counts_and_counters() {
    let board = Board::new();
    for side in Side::ALL {
        assert_eq!(board.marbles(side), SIDE_MARBLES);
        assert_eq!(board.eliminated(side), 0);
        assert_eq!(board.starting_marbles(side), SIDE_MARBLES);
    }
}

#[test]
fn test_snapshot_serializes_for_rendering() {
    let board = Board::new();
    let snapshot = serde_json::to_value(&board).unwrap();
    assert_eq!(snapshot["cells"][0][0], serde_json::json!({ "Occupied": "White" }));
    assert_eq!(snapshot["cells"][4][4], serde_json::json!("Empty"));
    assert_eq!(snapshot["cells"][0][8], serde_json::json!("OutOfPlay"));
    assert_eq!(snapshot["cells"][8][8], serde_json::json!({ "Occupied": "Black" }));
    assert_eq!(snapshot["eliminated"], serde_json::json!([0, 0]));

    let back: Board = serde_json::from_value(snapshot).unwrap();
    assert_eq!(back, board);
}
