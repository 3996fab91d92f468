//! Marble conservation invariant: no marble is created or silently lost.

use super::Invariant;
use crate::types::{Board, Side};

/// Invariant: for each side, marbles on the board plus marbles eliminated
/// equal the marbles the board was constructed with.
///
/// A resolver that dropped a marble without recording an elimination, or
/// duplicated one while shifting a chain, breaks this immediately.
pub struct MarbleConservationInvariant;

impl Invariant<Board> for MarbleConservationInvariant {
    fn holds(board: &Board) -> bool {
        Side::ALL.into_iter().all(|side| {
            board.marbles(side) + board.eliminated(side) == board.starting_marbles(side)
        })
    }

    fn description() -> &'static str {
        "every marble is on the board or counted as eliminated"
    }
}
