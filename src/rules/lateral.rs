//! Broadside resolution: shifting an aligned group sideways, no pushing.

use crate::action::{BoardDelta, RuleError};
use crate::direction::{Axis, Direction};
use crate::position::GridCoord;
use crate::types::{Board, Cell, Side};
use tracing::{info, instrument};

/// Resolves a broadside move of 1 to 3 aligned marbles.
///
/// Each marble steps once in `direction`. A destination occupied by any
/// marble -- the mover's or the opponent's -- blocks the whole group: there
/// is no pushing broadside. A destination past the edge of the world is a
/// deliberate self-elimination of that one marble; the rest of the group
/// still moves. Vacated cells empty out and surviving destinations take the
/// mover's color.
///
/// The board is never touched: the caller commits the returned delta.
///
/// # Errors
///
/// - [`RuleError::ColinearLateralMove`] when `direction` runs along the
///   group's own axis; such moves push and belong to
///   [`super::resolve_push`]. The engine pre-routes them, so seeing this
///   error means the resolver was called directly with a bad direction.
/// - [`RuleError::BlockedLateralMove`] when any destination is occupied.
#[instrument(skip(board))]
pub fn resolve_lateral(
    board: &Board,
    group: &[GridCoord],
    axis: Option<Axis>,
    direction: Direction,
    mover: Side,
) -> Result<BoardDelta, RuleError> {
    if let Some(axis) = axis {
        if axis.is_colinear(direction) {
            return Err(RuleError::ColinearLateralMove);
        }
    }

    let mut delta = BoardDelta::new();
    for &cell in group {
        let destination = cell.step(direction);
        match board.get(destination) {
            Cell::Occupied(_) => {
                let at = destination
                    .hex()
                    .expect("occupied cells always lie on the hexagon");
                return Err(RuleError::BlockedLateralMove(at));
            }
            Cell::OutOfPlay => {
                info!(side = ?mover, "marble moved off the board");
                delta.record(cell, Cell::Empty);
                delta.eliminate(mover);
            }
            Cell::Empty => {
                delta.record(cell, Cell::Empty);
                delta.record(destination, Cell::Occupied(mover));
            }
        }
    }
    Ok(delta)
}
