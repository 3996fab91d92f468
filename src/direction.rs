//! The six hexagonal directions and line-axis arithmetic.
//!
//! Directions are a closed domain, so every lookup here is a fixed table or
//! a pure function; nothing is computed at runtime beyond sign arithmetic.

use crate::position::{GridCoord, HexAddr};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// One of the six directions a marble can travel on the hexagonal board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Direction {
    /// Along the row, increasing digit.
    East,
    /// Along the row, decreasing digit.
    West,
    /// Toward `A`, same grid column.
    NorthEast,
    /// Toward `A`, decreasing grid column.
    NorthWest,
    /// Toward `I`, increasing grid column.
    SouthEast,
    /// Toward `I`, same grid column.
    SouthWest,
}

impl Direction {
    /// The direction's fixed `(row, col)` displacement in grid space.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, 0),
        }
    }

    /// The direction joining two adjacent addresses, if they are adjacent.
    ///
    /// Lets a caller express a move as "this marble, then its next
    /// position" instead of naming the direction outright.
    pub fn between(from: HexAddr, to: HexAddr) -> Option<Self> {
        let (a, b) = (from.to_grid(), to.to_grid());
        let delta = (b.row() - a.row(), b.col() - a.col());
        Direction::iter().find(|direction| direction.offset() == delta)
    }

    /// Short compass label, as printed on move prompts.
    pub fn label(self) -> &'static str {
        match self {
            Direction::East => "E",
            Direction::West => "W",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The two axes a multi-marble line can lie along.
///
/// The third hexagonal axis (NE-SW) is intentionally absent: a selection is
/// a line only when its cells share a row letter or a column digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Same row letter; colinear directions are E and W.
    Horizontal,
    /// Same column digit; colinear directions are NW and SE.
    Diagonal,
}

impl Axis {
    /// The two directions that run along this axis.
    pub fn colinear_directions(self) -> [Direction; 2] {
        match self {
            Axis::Horizontal => [Direction::East, Direction::West],
            Axis::Diagonal => [Direction::NorthWest, Direction::SouthEast],
        }
    }

    /// Whether the direction runs along this axis.
    pub fn is_colinear(self, direction: Direction) -> bool {
        self.colinear_directions().contains(&direction)
    }
}

/// The address-space unit step from one line endpoint toward another.
///
/// Works on the signs of the letter and digit differences, independent of
/// which of the six grid directions the line corresponds to, so a line's
/// reference point can be advanced by repeated application. The endpoints
/// must lie on a common line axis; the step is a (letter delta, digit delta)
/// pair suitable for [`HexAddr::offset`].
pub fn line_step(from: HexAddr, to: HexAddr) -> (i8, i8) {
    let dr = (to.row_index() as i8 - from.row_index() as i8).signum();
    let dd = if dr == 0 {
        (to.digit() as i8 - from.digit() as i8).signum()
    } else if to.digit() == from.digit() {
        0
    } else {
        -dr
    };
    (dr, dd)
}
