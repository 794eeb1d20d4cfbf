//! First-class invariants for solitaire.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and serve as documentation of system
//! guarantees.

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
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
///
/// Implementations are provided for tuples of two to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod face_up_suffix;
pub mod foundation_sequence;
pub mod orientation;
pub mod tableau_alternation;
pub mod unique_cards;

pub use face_up_suffix::FaceUpSuffixInvariant;
pub use foundation_sequence::FoundationSequenceInvariant;
pub use orientation::StockWasteOrientationInvariant;
pub use tableau_alternation::{TableauAlternationInvariant, face_up_run_in_sequence};
pub use unique_cards::{CompleteDeckInvariant, UniqueCardsInvariant};

/// Table invariants that hold for every position, checked after each move.
///
/// Tableau sequencing is relational and lives in the move contract.
pub type SolitaireInvariants = (
    UniqueCardsInvariant,
    FoundationSequenceInvariant,
    FaceUpSuffixInvariant,
    StockWasteOrientationInvariant,
);
