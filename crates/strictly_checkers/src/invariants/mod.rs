//! First-class board invariants.
//!
//! Invariants are properties every reachable board must satisfy. They are
//! checked after each committed turn in debug builds and can be tested
//! independently.

use super::board::Board;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

impl InvariantViolation {
    /// The violation of `I` by `state`, if it has one.
    pub fn of<S, I: Invariant<S>>(state: &S) -> Option<Self> {
        (!I::holds(state)).then(|| Self {
            description: I::description(),
        })
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [fn(&S) -> Option<InvariantViolation>; 3] = [
            InvariantViolation::of::<S, I1>,
            InvariantViolation::of::<S, I2>,
            InvariantViolation::of::<S, I3>,
        ];
        let violations: Vec<_> = checks.iter().filter_map(|check| check(state)).collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

mod cell_index;
mod piece_count;
mod playable_squares;

pub use cell_index::CellIndexInvariant;
pub use piece_count::PieceCountInvariant;
pub use playable_squares::PlayableSquaresInvariant;

/// All board invariants as a composable set.
pub type CheckersInvariants = (
    PlayableSquaresInvariant,
    PieceCountInvariant,
    CellIndexInvariant,
);

/// Asserts every board invariant (debug builds only).
pub fn assert_invariants(board: &Board) {
    let result = CheckersInvariants::check_all(board);
    debug_assert!(result.is_ok(), "Board invariants violated: {result:?}");
}
