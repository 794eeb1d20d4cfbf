//! Contract-based validation for solitaire moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{DropTarget, Move, MoveError, Source};
use super::invariants::{InvariantSet, SolitaireInvariants, face_up_run_in_sequence};
use super::pile::TableauSlot;
use super::table::Table;
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the source holds a face-up card or run to lift.
pub struct SourceLiftable;

impl SourceLiftable {
    /// Checks the source of `mov`.
    #[instrument(skip(table))]
    pub fn check(mov: &Move, table: &Table) -> Result<(), MoveError> {
        table.lift(mov.source).map(|_| ())
    }
}

/// Precondition: a tableau run is not dropped back on its own pile.
pub struct DistinctPiles;

impl DistinctPiles {
    /// Checks that source and destination differ.
    #[instrument]
    pub fn check(mov: &Move) -> Result<(), MoveError> {
        match (mov.source, mov.destination) {
            (Source::Tableau { slot: from, .. }, DropTarget::Tableau(to)) if from == to => {
                Err(MoveError::SamePile(from))
            }
            _ => Ok(()),
        }
    }
}

/// Precondition: the destination pile takes the lifted run.
pub struct DestinationAccepts;

impl DestinationAccepts {
    /// Checks the destination rule against the lifted cards.
    #[instrument(skip(table))]
    pub fn check(mov: &Move, table: &Table) -> Result<(), MoveError> {
        let run = table.lift(mov.source)?;
        if table.accepts(run, mov.destination) {
            Ok(())
        } else {
            let lead = run
                .first()
                .map(|card| card.id())
                .ok_or(MoveError::NothingToLift(mov.source))?;
            Err(MoveError::Rejected(mov.destination, lead))
        }
    }
}

/// Composite precondition: a move is legal if its source can be lifted, it
/// lands on another pile, and that pile accepts it.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(table))]
    pub fn check(mov: &Move, table: &Table) -> Result<(), MoveError> {
        SourceLiftable::check(mov, table)?;
        DistinctPiles::check(mov)?;
        DestinationAccepts::check(mov, table)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: a tableau pile whose face-up cards were in sequence before
/// the move still is after it.
///
/// Untouched piles cannot change and a truncated source keeps a suffix of
/// its run, so in practice this checks the destination.
pub struct SequencePreserved;

impl SequencePreserved {
    /// Compares every tableau pile before and after.
    #[instrument(skip_all)]
    pub fn check(before: &Table, after: &Table) -> Result<(), MoveError> {
        match TableauSlot::iter().find(|&slot| {
            face_up_run_in_sequence(before.tableau(slot)) && !face_up_run_in_sequence(after.tableau(slot))
        }) {
            Some(slot) => {
                warn!(%slot, "Tableau run broken");
                Err(MoveError::InvariantViolation(format!(
                    "Postcondition failed: {} no longer alternates color and descends in rank",
                    slot
                )))
            }
            None => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Source can be lifted
/// - Source and destination are different piles
/// - Destination accepts the run
///
/// Postconditions:
/// - Card count unchanged
/// - Tableau runs that were in sequence stay in sequence
/// - All table invariants still hold
pub struct MoveContract;

impl Contract<Table, Move> for MoveContract {
    fn pre(table: &Table, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, table)
    }

    fn post(before: &Table, after: &Table) -> Result<(), MoveError> {
        let (was, now) = (before.card_count(), after.card_count());
        if was != now {
            warn!(was, now, "Card count changed");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: card count changed from {} to {}",
                was, now
            )));
        }

        SequencePreserved::check(before, after)?;

        SolitaireInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::pile::{FoundationSlot, TableauSlot};

    fn table_with_waste(waste: Vec<Card>) -> Table {
        let mut tableau: [Vec<Card>; 7] = Default::default();
        tableau[0] = vec![Card::face_up(Rank::Seven, Suit::Spade)];
        Table::from_piles(tableau, Default::default(), vec![], waste)
    }

    #[test]
    fn test_precondition_empty_source() {
        let table = table_with_waste(vec![]);
        let mv = Move::new(Source::Waste, DropTarget::Foundation(FoundationSlot::First));
        assert_eq!(
            MoveContract::pre(&table, &mv),
            Err(MoveError::NothingToLift(Source::Waste))
        );
    }

    #[test]
    fn test_precondition_accepting_destination() {
        let table = table_with_waste(vec![Card::face_up(Rank::Six, Suit::Heart)]);
        let mv = Move::new(Source::Waste, DropTarget::Tableau(TableauSlot::First));
        assert!(MoveContract::pre(&table, &mv).is_ok());
    }

    #[test]
    fn test_precondition_rejecting_destination() {
        let table = table_with_waste(vec![Card::face_up(Rank::Six, Suit::Club)]);
        let mv = Move::new(Source::Waste, DropTarget::Tableau(TableauSlot::First));
        assert!(matches!(
            MoveContract::pre(&table, &mv),
            Err(MoveError::Rejected(DropTarget::Tableau(TableauSlot::First), _))
        ));
    }

    #[test]
    fn test_precondition_same_pile() {
        let table = table_with_waste(vec![]);
        let mv = Move::new(
            Source::Tableau {
                slot: TableauSlot::First,
                start: 0,
            },
            DropTarget::Tableau(TableauSlot::First),
        );
        assert_eq!(
            MoveContract::pre(&table, &mv),
            Err(MoveError::SamePile(TableauSlot::First))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = table_with_waste(vec![Card::face_up(Rank::Six, Suit::Heart)]);
        let mut after = before.clone();
        after
            .apply_move(Move::new(Source::Waste, DropTarget::Tableau(TableauSlot::First)))
            .expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_ignores_untouched_unsequenced_pile() {
        let mut tableau: [Vec<Card>; 7] = Default::default();
        tableau[0] = vec![Card::face_up(Rank::Nine, Suit::Club), Card::face_up(Rank::Two, Suit::Spade)];
        let before = Table::from_piles(tableau, Default::default(), vec![], vec![Card::face_up(Rank::Ace, Suit::Heart)]);
        let mut after = before.clone();
        after
            .apply_move(Move::new(Source::Waste, DropTarget::Foundation(FoundationSlot::First)))
            .expect("ace goes to an empty foundation");
        assert!(after.waste().is_empty());
        assert_eq!(after.foundation(FoundationSlot::First).len(), 1);
    }

    #[test]
    fn test_sequence_preserved_detects_broken_run() {
        let mut tableau: [Vec<Card>; 7] = Default::default();
        tableau[1] = vec![Card::face_up(Rank::Seven, Suit::Spade)];
        let before = Table::from_piles(tableau.clone(), Default::default(), vec![], vec![]);
        tableau[1].push(Card::face_up(Rank::Six, Suit::Club));
        let after = Table::from_piles(tableau, Default::default(), vec![], vec![]);
        assert!(matches!(
            SequencePreserved::check(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
        assert!(SequencePreserved::check(&after, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_lost_card() {
        let before = table_with_waste(vec![Card::face_up(Rank::Six, Suit::Heart)]);
        let after = table_with_waste(vec![]);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
