//! First-class move actions, their outcomes, and rule violations.
//!
//! Moves are domain events, not side effects: a [`Move`] captures the
//! player's intent, a [`BoardDelta`] captures exactly what an accepted move
//! changes, and a [`RuleError`] explains a rejection well enough for the
//! caller's input loop to re-prompt.

use crate::direction::Direction;
use crate::position::{GridCoord, HexAddr};
use crate::types::{Cell, Side};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A move submitted by a player: which side, which marbles, which way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The selected marbles, 1 to 3 addresses. A three-marble group may be
    /// given as its two endpoints.
    pub selection: Vec<HexAddr>,
    /// The direction of travel.
    pub direction: Direction,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, selection: Vec<HexAddr>, direction: Direction) -> Self {
        Self {
            side,
            selection,
            direction,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}:", self.side)?;
        for addr in &self.selection {
            write!(f, " {addr}")?;
        }
        write!(f, " -> {}", self.direction)
    }
}

/// The cell updates and eliminations an accepted move produces.
///
/// Built speculatively by a resolver and discarded on rejection, or
/// committed to the board as one transaction on acceptance. Returned to the
/// caller so a rendering collaborator can redraw only what changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardDelta {
    cells: BTreeMap<GridCoord, Cell>,
    eliminated: Vec<Side>,
}

impl BoardDelta {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, at: GridCoord, cell: Cell) {
        self.cells.insert(at, cell);
    }

    pub(crate) fn eliminate(&mut self, side: Side) {
        self.eliminated.push(side);
    }

    /// The cells the move changes, keyed by grid coordinate.
    pub fn cells(&self) -> &BTreeMap<GridCoord, Cell> {
        &self.cells
    }

    /// One entry per marble pushed off the board, naming its side.
    pub fn eliminated(&self) -> &[Side] {
        &self.eliminated
    }
}

/// A rule violation. Every variant is a caller-recoverable validation
/// failure; a rejected move leaves the board bit-for-bit unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RuleError {
    /// The selection has the wrong cardinality or its cells do not form a
    /// contiguous line along a supported axis.
    #[display("selected cells do not form a line")]
    MalformedSelection,

    /// A selected cell is not occupied by the moving side.
    #[display("cell {} is not owned by the moving side", _0)]
    ForeignMarble(HexAddr),

    /// The derived middle of a three-marble range is not occupied by the
    /// moving side.
    #[display("middle cell {} is not owned by the moving side", _0)]
    NonFriendlyDerivedMiddle(HexAddr),

    /// A push would move more than three of the mover's marbles.
    #[display("cannot push more than 3 marbles")]
    TooManyMarbles,

    /// A push against an equal or greater opposing group, or an opposing
    /// chain folding back into the mover's own marble.
    #[display("wrong sumito at {}", _0)]
    IllegalSumito(HexAddr),

    /// A broadside destination is already occupied.
    #[display("destination {} is occupied", _0)]
    BlockedLateralMove(HexAddr),

    /// A broadside resolution was requested along the line's own axis.
    /// Such directions push instead; reaching the lateral resolver with one
    /// is a caller programming error.
    #[display("broadside move requested along the line's own axis")]
    ColinearLateralMove,
}

impl std::error::Error for RuleError {}
