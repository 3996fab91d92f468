//! The move engine: validation, dispatch, and atomic commit.
//!
//! The engine is the only code that writes to a [`Board`]. It validates a
//! selection against ownership and alignment, routes the move to the push
//! or broadside resolver, and commits an accepted resolution as one
//! transaction. A rejected move returns its [`RuleError`] with the board
//! untouched; re-prompting is the caller's business.

use crate::action::{BoardDelta, Move, RuleError};
use crate::direction::Direction;
use crate::invariants::{AbaloneInvariants, InvariantSet};
use crate::position::HexAddr;
use crate::rules;
use crate::selection::{classify, ClassifiedSelection};
use crate::types::{Board, Cell, Side};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Classifies a selection and checks that the moving side owns every
/// supplied cell.
///
/// A derived middle is not checked here: its ownership is the dispatcher's
/// concern, and it gets the dedicated
/// [`RuleError::NonFriendlyDerivedMiddle`] so the caller can tell a bad
/// range apart from a bad pick.
///
/// # Errors
///
/// [`RuleError::MalformedSelection`] for alignment failures and
/// [`RuleError::ForeignMarble`] for the first supplied cell the side does
/// not own.
#[instrument(skip(board))]
pub fn validate_and_classify(
    board: &Board,
    side: Side,
    addresses: &[HexAddr],
) -> Result<ClassifiedSelection, RuleError> {
    let selection = classify(side, addresses)?;
    for &cell in selection.cells() {
        if selection.derived_middle() == Some(cell) {
            continue;
        }
        if board.at(cell) != Cell::Occupied(side) {
            return Err(RuleError::ForeignMarble(cell));
        }
    }
    Ok(selection)
}

/// The directions a classified selection may be offered.
///
/// A single marble travels all six ways. A multi-marble line is offered
/// only its four broadside directions: pushing along the line is expressed
/// by selecting the chain's rear marble alone.
pub fn legal_directions(selection: &ClassifiedSelection) -> Vec<Direction> {
    match selection.axis() {
        None => Direction::iter().collect(),
        Some(axis) => Direction::iter()
            .filter(|&direction| !axis.is_colinear(direction))
            .collect(),
    }
}

/// Applies a classified move to the board.
///
/// Dispatch: a single marble, or a direction colinear with the line's own
/// axis, resolves as a push seeded from the chain's rear marble; any other
/// direction resolves broadside, after the derived middle of an
/// endpoint-given range proves friendly. On acceptance the resolution is
/// committed atomically and returned for rendering; on rejection the board
/// is left bit-for-bit unchanged.
///
/// # Errors
///
/// Any [`RuleError`] surfaced by the resolvers, plus
/// [`RuleError::NonFriendlyDerivedMiddle`] when a derived middle belongs to
/// the opponent or is empty.
#[instrument(skip(board))]
pub fn apply_move(
    board: &mut Board,
    selection: &ClassifiedSelection,
    direction: Direction,
) -> Result<BoardDelta, RuleError> {
    let side = selection.side();
    let delta = match selection.axis() {
        None => rules::resolve_push(board, selection.cells()[0].to_grid(), direction, side)?,
        Some(axis) if axis.is_colinear(direction) => {
            let origin = rear_marble(selection.cells(), direction);
            rules::resolve_push(board, origin.to_grid(), direction, side)?
        }
        Some(axis) => {
            if let Some(middle) = selection.derived_middle() {
                if board.at(middle) != Cell::Occupied(side) {
                    return Err(RuleError::NonFriendlyDerivedMiddle(middle));
                }
            }
            let group: Vec<_> = selection.cells().iter().map(|c| c.to_grid()).collect();
            rules::resolve_lateral(board, &group, Some(axis), direction, side)?
        }
    };

    board.commit(&delta);
    debug_assert!(
        AbaloneInvariants::check_all(board).is_ok(),
        "commit violated a board invariant"
    );
    Ok(delta)
}

/// Validates, classifies, and applies a submitted move in one step.
///
/// # Errors
///
/// Everything [`validate_and_classify`] and [`apply_move`] can return.
#[instrument(skip(board))]
pub fn submit(board: &mut Board, action: &Move) -> Result<BoardDelta, RuleError> {
    let selection = validate_and_classify(board, action.side, &action.selection)?;
    apply_move(board, &selection, action.direction)
}

/// The cell a colinear push starts from: the group member the direction
/// walks away from, so the chain traverses the whole selection.
fn rear_marble(cells: &[HexAddr], direction: Direction) -> HexAddr {
    let first = cells[0];
    let last = cells[cells.len() - 1];
    let (fa, la) = (first.to_grid(), last.to_grid());
    let along = ((la.row() - fa.row()).signum(), (la.col() - fa.col()).signum());
    let (dr, dc) = direction.offset();
    if dr * along.0 + dc * along.1 > 0 {
        first
    } else {
        last
    }
}
