//! In-line push resolution, including sumito displacement and elimination.

use crate::action::{BoardDelta, RuleError};
use crate::direction::Direction;
use crate::position::GridCoord;
use crate::types::{Board, Cell, Side};
use tracing::{info, instrument};

/// The hexagonal address of a cell known to lie on the board.
fn hex_of(at: GridCoord) -> crate::position::HexAddr {
    at.hex().expect("occupied cells always lie on the hexagon")
}

/// Resolves a push: the marble at `origin` travels along `direction`,
/// carrying its own contiguous chain and displacing a strictly smaller
/// opposing chain ahead of it.
///
/// The walk tallies friendly and opposing marbles as it goes. At most three
/// friendly marbles may move, and the move is a legal sumito only while the
/// friendly tally strictly exceeds the opposing one. A chain that runs into
/// open space shifts; a marble driven past the edge of the world is
/// eliminated -- the mover's own marble if its chain ends at the edge
/// (allowed, at the mover's expense), an opposing marble if the sumito
/// carries it off.
///
/// The board is never touched: the caller commits the returned delta.
///
/// # Errors
///
/// - [`RuleError::MalformedSelection`] when `origin` lies off the board.
/// - [`RuleError::ForeignMarble`] when `origin` is not the mover's marble.
/// - [`RuleError::TooManyMarbles`] when the chain would move a fourth
///   friendly marble.
/// - [`RuleError::IllegalSumito`] when the opposing tally reaches the
///   friendly one, or an opposing chain runs back into the mover's marble.
#[instrument(skip(board))]
pub fn resolve_push(
    board: &Board,
    origin: GridCoord,
    direction: Direction,
    mover: Side,
) -> Result<BoardDelta, RuleError> {
    let origin_addr = origin.hex().ok_or(RuleError::MalformedSelection)?;
    if board.get(origin) != Cell::Occupied(mover) {
        return Err(RuleError::ForeignMarble(origin_addr));
    }

    let mut delta = BoardDelta::new();
    delta.record(origin, Cell::Empty);
    let mut friendly: u8 = 1;
    let mut opposing: u8 = 0;
    let mut current = origin;

    while let Cell::Occupied(owner) = board.get(current) {
        let next = current.step(direction);
        let next_cell = board.get(next);
        match next_cell.owner() {
            Some(side) if side == mover => friendly += 1,
            Some(_) => opposing += 1,
            None => {}
        }
        if friendly > 3 {
            return Err(RuleError::TooManyMarbles);
        }

        if owner == mover {
            match next_cell {
                Cell::OutOfPlay => {
                    // The mover drives their own chain over the edge.
                    info!(side = ?mover, at = %hex_of(current), "own marble pushed off the board");
                    delta.eliminate(mover);
                    break;
                }
                _ => delta.record(next, Cell::Occupied(mover)),
            }
        } else {
            match next_cell {
                Cell::Occupied(side) if side == mover => {
                    // The opposing chain folds back into the mover's marbles.
                    return Err(RuleError::IllegalSumito(hex_of(next)));
                }
                Cell::OutOfPlay => {
                    info!(side = ?owner, at = %hex_of(current), "marble pushed off the board");
                    delta.eliminate(owner);
                    break;
                }
                _ => delta.record(next, Cell::Occupied(owner)),
            }
        }

        if opposing >= friendly {
            let at = if matches!(next_cell, Cell::Occupied(_)) {
                next
            } else {
                current
            };
            return Err(RuleError::IllegalSumito(hex_of(at)));
        }
        current = next;
    }

    Ok(delta)
}
