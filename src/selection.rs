//! Selection alignment: deciding whether picked cells form a legal line.
//!
//! Classification is pure address arithmetic; it never looks at the board.
//! Ownership is layered on top by the move engine.

use crate::action::RuleError;
use crate::direction::{line_step, Axis};
use crate::position::HexAddr;
use crate::types::Side;
use tracing::instrument;

/// The shape of a classified selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A single marble; no axis constrains its travel.
    Single,
    /// Two adjacent marbles along an axis.
    Pair(Axis),
    /// Three contiguous marbles along an axis.
    Triple(Axis),
}

impl LineKind {
    /// The line's axis, when the selection has one.
    pub fn axis(self) -> Option<Axis> {
        match self {
            LineKind::Single => None,
            LineKind::Pair(axis) | LineKind::Triple(axis) => Some(axis),
        }
    }
}

/// A selection that passed alignment classification.
///
/// Cells are ordered ascending along the line's axis (by digit for
/// horizontal lines, by letter for diagonal ones). When a three-marble
/// range was given as its endpoints, the middle cell is derived -- never
/// taken from the caller -- and remembered so the engine can check its
/// ownership separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedSelection {
    side: Side,
    cells: Vec<HexAddr>,
    kind: LineKind,
    derived_middle: Option<HexAddr>,
}

impl ClassifiedSelection {
    /// The side the selection belongs to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The full marble group, ordered along the axis; includes a derived
    /// middle.
    pub fn cells(&self) -> &[HexAddr] {
        &self.cells
    }

    /// The selection's shape.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The derived middle of an endpoint-given range, if any.
    pub fn derived_middle(&self) -> Option<HexAddr> {
        self.derived_middle
    }

    /// The line's axis, when the selection has one.
    pub fn axis(&self) -> Option<Axis> {
        self.kind.axis()
    }

    /// Number of marbles in the group.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the group is empty. Never true for a classified selection.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Classifies 1 to 3 addresses as a marble group.
///
/// Two or three addresses form a line only when they share a row letter
/// (horizontal) or a column digit (diagonal) and sit inside a window the
/// size of the resulting group. A three-marble range may be given either in
/// full or as its two endpoints; in the latter case the middle is derived
/// by stepping one unit along the line, which is the average of the
/// endpoints' letter ordinals and digits.
///
/// # Errors
///
/// Returns [`RuleError::MalformedSelection`] for an empty or oversized
/// selection, duplicate addresses, or cells that fail both axis tests.
#[instrument]
pub fn classify(side: Side, addresses: &[HexAddr]) -> Result<ClassifiedSelection, RuleError> {
    if addresses.is_empty() || addresses.len() > 3 {
        return Err(RuleError::MalformedSelection);
    }
    if let [single] = addresses {
        return Ok(ClassifiedSelection {
            side,
            cells: vec![*single],
            kind: LineKind::Single,
            derived_middle: None,
        });
    }
    for (i, addr) in addresses.iter().enumerate() {
        if addresses[..i].contains(addr) {
            return Err(RuleError::MalformedSelection);
        }
    }

    let same_row = addresses
        .iter()
        .all(|a| a.row_index() == addresses[0].row_index());
    let same_digit = addresses.iter().all(|a| a.digit() == addresses[0].digit());
    let axis = if same_row {
        Axis::Horizontal
    } else if same_digit {
        Axis::Diagonal
    } else {
        return Err(RuleError::MalformedSelection);
    };

    let mut cells = addresses.to_vec();
    match axis {
        Axis::Horizontal => cells.sort_by_key(|a| a.digit()),
        Axis::Diagonal => cells.sort_by_key(|a| a.row_index()),
    }
    let first = cells[0];
    let last = cells[cells.len() - 1];
    let span = match axis {
        Axis::Horizontal => last.digit() - first.digit(),
        Axis::Diagonal => last.row_index() - first.row_index(),
    };

    let (kind, derived_middle) = match (cells.len(), span) {
        (2, 1) => (LineKind::Pair(axis), None),
        (2, 2) => {
            // Endpoint form: fill in the omitted middle cell.
            let middle = first
                .offset(line_step(first, last))
                .ok_or(RuleError::MalformedSelection)?;
            cells.insert(1, middle);
            (LineKind::Triple(axis), Some(middle))
        }
        (3, 2) => (LineKind::Triple(axis), None),
        _ => return Err(RuleError::MalformedSelection),
    };

    Ok(ClassifiedSelection {
        side,
        cells,
        kind,
        derived_middle,
    })
}
