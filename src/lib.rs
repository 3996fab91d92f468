//! Strictly Abalone - pure Abalone game logic.
//!
//! This library validates player-selected marble groups, classifies moves,
//! and resolves them on the hexagonal board: in-line pushes with sumito
//! displacement and elimination, and broadside shifts of aligned groups.
//! It applies exactly one move at a time and tracks the per-side
//! elimination counters; prompting, rendering, turn alternation, and win
//! detection belong to the calling shell.
//!
//! # Architecture
//!
//! - **Position**: hexagonal addresses (`I1`) mapped onto a 9x9 storage
//!   grid with a permanently dead border
//! - **Board**: typed cells plus elimination counters, mutated only through
//!   the engine's atomic commit
//! - **Rules**: pure push and broadside resolvers that build a pending
//!   delta and never touch the board
//! - **Engine**: ownership and alignment validation, dispatch, commit
//!
//! Everything is single-threaded and synchronous; callers exposing the
//! engine as a service must serialize moves per game instance.
//!
//! # Example
//!
//! ```
//! use strictly_abalone::{apply_move, validate_and_classify, Board, Direction, HexAddr, Side};
//!
//! # fn main() -> Result<(), strictly_abalone::RuleError> {
//! let mut board = Board::new();
//! let marble = HexAddr::parse("I1").unwrap();
//!
//! // Black pushes its corner marble toward the center.
//! let selection = validate_and_classify(&board, Side::Black, &[marble])?;
//! let delta = apply_move(&mut board, &selection, Direction::NorthWest)?;
//! assert_eq!(delta.cells().len(), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod direction;
mod engine;
mod invariants;
mod position;
mod rules;
mod selection;
mod types;

// Crate-level exports - actions and errors
pub use action::{BoardDelta, Move, RuleError};

// Crate-level exports - directions and axes
pub use direction::{line_step, Axis, Direction};

// Crate-level exports - engine entry points
pub use engine::{apply_move, legal_directions, submit, validate_and_classify};

// Crate-level exports - invariants
pub use invariants::{
    AbaloneInvariants, FixedDeadZoneInvariant, Invariant, InvariantSet, InvariantViolation,
    MarbleConservationInvariant,
};

// Crate-level exports - addressing
pub use position::{GridCoord, HexAddr, GRID_DIMENSION};

// Crate-level exports - resolvers
pub use rules::{resolve_lateral, resolve_push};

// Crate-level exports - selection classification
pub use selection::{classify, ClassifiedSelection, LineKind};

// Crate-level exports - board state
pub use types::{Board, Cell, Side, SIDE_MARBLES};
