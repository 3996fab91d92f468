//! Fixed dead zone invariant: the hexagon's footprint never changes.

use super::Invariant;
use crate::position::{GridCoord, GRID_DIMENSION};
use crate::types::{Board, Cell};

/// Invariant: a cell is out of play exactly when it lies outside the
/// hexagon's footprint.
///
/// Resolvers walk past the edge of the world, so a sign error in a
/// direction table would try to write a dead cell; this catches it.
pub struct FixedDeadZoneInvariant;

impl Invariant<Board> for FixedDeadZoneInvariant {
    fn holds(board: &Board) -> bool {
        let dim = GRID_DIMENSION as i8;
        (0..dim).all(|row| {
            (0..dim).all(|col| {
                let at = GridCoord::new(row, col);
                (board.get(at) == Cell::OutOfPlay) == !at.in_hexagon()
            })
        })
    }

    fn description() -> &'static str {
        "out-of-play cells exactly cover the hexagon's complement"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::BoardDelta;
    use crate::position::HexAddr;

    #[test]
    fn test_holds_for_initial_board() {
        assert!(FixedDeadZoneInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_holds_for_empty_constructed_board() {
        assert!(FixedDeadZoneInvariant::holds(&Board::from_marbles(&[])));
    }

    #[test]
    fn test_detects_a_live_cell_going_dead() {
        let mut board = Board::new();
        let mut delta = BoardDelta::new();
        delta.record(HexAddr::parse("E5").unwrap().to_grid(), Cell::OutOfPlay);
        board.commit(&delta);
        assert!(!FixedDeadZoneInvariant::holds(&board));
    }
}
