//! First-class invariants for the Abalone board.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation of
//! system guarantees; the engine checks them after every commit in debug
//! builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or `Err` with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod fixed_dead_zone;
pub mod marble_conservation;

pub use fixed_dead_zone::FixedDeadZoneInvariant;
pub use marble_conservation::MarbleConservationInvariant;

/// All board invariants as a composable set.
pub type AbaloneInvariants = (MarbleConservationInvariant, FixedDeadZoneInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    #[test]
    fn test_invariant_set_holds_for_initial_board() {
        let board = Board::new();
        assert!(AbaloneInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        use crate::action::BoardDelta;
        use crate::position::HexAddr;
        use crate::types::Cell;

        let mut board = Board::new();
        // A marble disappears without a matching elimination, and a live
        // cell goes dead.
        let mut delta = BoardDelta::new();
        delta.record(HexAddr::parse("I1").unwrap().to_grid(), Cell::Empty);
        delta.record(HexAddr::parse("E5").unwrap().to_grid(), Cell::OutOfPlay);
        board.commit(&delta);

        let violations = AbaloneInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
