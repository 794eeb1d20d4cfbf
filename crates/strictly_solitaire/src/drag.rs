//! Phase-specific typestate structs for the drag gesture.
//!
//! Each phase is its own type. An [`Idle`] table can be clicked and picked
//! from; a [`Dragging`] table can only be released. Releasing is the single
//! transition that may mutate the table, and it does so only when a target
//! accepts the lifted cards. A rejected drop never touched anything, so there
//! is nothing to restore.

use super::action::{DropOutcome, DropTarget, Move, MoveError, PickError, Source, StockOutcome};
use super::card::Card;
use super::pile::{FoundationSlot, TableauSlot};
use super::pointer::{Offset, Press};
use super::table::Table;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Idle Phase
// ─────────────────────────────────────────────────────────────

/// No gesture in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idle {
    table: Table,
}

impl Idle {
    /// Wraps a table with no gesture in progress.
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    /// Returns the table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Gives the table back.
    pub fn into_table(self) -> Table {
        self.table
    }

    /// Clicks the stock.
    pub fn click_stock(&mut self) -> StockOutcome {
        self.table.click_stock()
    }

    /// Applies a fully specified move without a gesture.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.table.apply_move(mv)
    }

    /// Lifts the cards at `source` (consumes idle, returns dragging).
    ///
    /// Only a face-up waste top or a face-up tableau run can be lifted. The
    /// cards stay in their pile; the drag only hides them from view.
    #[instrument(skip(self))]
    pub fn pick_up(self, source: Source, offset: Offset) -> Pickup {
        match self.table.lift(source) {
            Ok(run) => {
                debug!(cards = run.len(), "Lifted");
                Pickup::Lifted(Dragging {
                    table: self.table,
                    source,
                    offset,
                })
            }
            Err(error) => {
                debug!(%error, "Nothing liftable");
                Pickup::Refused { idle: self, error }
            }
        }
    }
}

/// Result of trying to pick cards up.
#[derive(Debug)]
pub enum Pickup {
    /// The cards are lifted.
    Lifted(Dragging),
    /// Nothing could be lifted; the table is unchanged.
    Refused {
        /// The unchanged idle table.
        idle: Idle,
        /// Why the source could not be lifted.
        error: MoveError,
    },
}

// ─────────────────────────────────────────────────────────────
//  Dragging Phase
// ─────────────────────────────────────────────────────────────

/// Cards lifted and following the pointer.
///
/// The table is frozen for the duration: nothing can mutate it until
/// [`Dragging::release`]. The lifted run is therefore always the exact tail
/// of its source pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dragging {
    table: Table,
    source: Source,
    offset: Offset,
}

impl Dragging {
    /// Returns the authoritative table, lifted cards still in place.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Where the lifted cards came from.
    pub fn source(&self) -> Source {
        self.source
    }

    /// Pointer-to-anchor offset captured at pick-up.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// The lifted cards, lead card first.
    pub fn lifted(&self) -> &[Card] {
        // The source was liftable at pick-up and the table is frozen since.
        self.table.lift(self.source).unwrap_or_default()
    }

    /// A tableau pile as it should be drawn: without the lifted run.
    pub fn visible_tableau(&self, slot: TableauSlot) -> &[Card] {
        let cards = self.table.tableau(slot).cards();
        match self.source {
            Source::Tableau { slot: from, start } if from == slot => &cards[..start],
            _ => cards,
        }
    }

    /// The waste top as it should be drawn: the card under a lifted one.
    pub fn visible_waste_top(&self) -> Option<&Card> {
        let cards = self.table.waste().cards();
        match self.source {
            Source::Waste => cards.len().checked_sub(2).and_then(|i| cards.get(i)),
            Source::Tableau { .. } => cards.last(),
        }
    }

    /// Drops the lifted cards over `targets`.
    ///
    /// Candidates are tried foundations first, then tableau piles, each left
    /// to right; the first that accepts wins. If none does, the table is
    /// returned exactly as it was.
    #[instrument(skip(self), fields(source = %self.source))]
    pub fn release(self, targets: &[DropTarget]) -> (Idle, Result<DropOutcome, MoveError>) {
        let mut ordered = targets.to_vec();
        ordered.sort();
        ordered.dedup();

        let source = self.source;
        let mut idle = Idle::new(self.table);

        let Some(mv) = ordered
            .into_iter()
            .map(|target| Move::new(source, target))
            .find(|mv| idle.table.check_move(mv).is_ok())
        else {
            debug!("No target accepted, reverting");
            return (idle, Ok(DropOutcome::Reverted));
        };

        match idle.table.apply_move(mv) {
            Ok(()) => {
                info!(%mv, "Drop committed");
                (idle, Ok(DropOutcome::Committed(mv)))
            }
            Err(err) => {
                warn!(%err, %mv, "Accepted drop failed to apply");
                (idle, Err(err))
            }
        }
    }

    /// Drops the lifted cards on the first pile anywhere on the table that
    /// takes them.
    pub fn release_anywhere(self) -> (Idle, Result<DropOutcome, MoveError>) {
        let targets: Vec<_> = FoundationSlot::iter()
            .map(DropTarget::Foundation)
            .chain(TableauSlot::iter().map(DropTarget::Tableau))
            .collect();
        self.release(&targets)
    }
}

// ─────────────────────────────────────────────────────────────
//  Session
// ─────────────────────────────────────────────────────────────

/// What a pointer-down did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The stock was clicked.
    StockClicked(StockOutcome),
    /// Cards were lifted from this source.
    Lifted(Source),
}

/// A game with its current gesture phase, for callers that keep state
/// between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// No gesture in progress.
    Idle(Idle),
    /// Cards are being dragged.
    Dragging(Dragging),
}

impl Session {
    /// Starts a session on `table`.
    pub fn new(table: Table) -> Self {
        Session::Idle(Idle::new(table))
    }

    /// Returns the authoritative table.
    pub fn table(&self) -> &Table {
        match self {
            Session::Idle(idle) => idle.table(),
            Session::Dragging(dragging) => dragging.table(),
        }
    }

    /// Returns the drag in progress, if any.
    pub fn dragging(&self) -> Option<&Dragging> {
        match self {
            Session::Idle(_) => None,
            Session::Dragging(dragging) => Some(dragging),
        }
    }

    /// Handles a pointer-down that the caller resolved to `press`.
    ///
    /// A press while already dragging is refused and changes nothing.
    #[instrument(skip(self))]
    pub fn press(self, press: Press, offset: Offset) -> (Session, Result<PressOutcome, PickError>) {
        let mut idle = match self {
            Session::Idle(idle) => idle,
            Session::Dragging(dragging) => {
                let source = dragging.source();
                return (
                    Session::Dragging(dragging),
                    Err(PickError::AlreadyDragging(source)),
                );
            }
        };

        let source = match press {
            Press::Stock => {
                let outcome = idle.click_stock();
                return (Session::Idle(idle), Ok(PressOutcome::StockClicked(outcome)));
            }
            Press::Waste => Source::Waste,
            Press::Tableau { slot, index } => Source::Tableau { slot, start: index },
        };

        match idle.pick_up(source, offset) {
            Pickup::Lifted(dragging) => (Session::Dragging(dragging), Ok(PressOutcome::Lifted(source))),
            Pickup::Refused { idle, error } => (Session::Idle(idle), Err(PickError::NotLiftable(error))),
        }
    }

    /// Handles a pointer-up over `targets`.
    ///
    /// Returns `None` when no drag was in progress.
    #[instrument(skip(self))]
    pub fn release(self, targets: &[DropTarget]) -> (Session, Option<Result<DropOutcome, MoveError>>) {
        match self {
            Session::Idle(idle) => (Session::Idle(idle), None),
            Session::Dragging(dragging) => {
                let (idle, outcome) = dragging.release(targets);
                (Session::Idle(idle), Some(outcome))
            }
        }
    }

    /// Like [`Session::release`], trying every pile on the table.
    pub fn release_anywhere(self) -> (Session, Option<Result<DropOutcome, MoveError>>) {
        match self {
            Session::Idle(idle) => (Session::Idle(idle), None),
            Session::Dragging(dragging) => {
                let (idle, outcome) = dragging.release_anywhere();
                (Session::Idle(idle), Some(outcome))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn position() -> Table {
        let mut tableau: [Vec<Card>; 7] = Default::default();
        tableau[0] = vec![Card::new(Rank::Two, Suit::Club), Card::face_up(Rank::Seven, Suit::Spade)];
        tableau[1] = vec![Card::face_up(Rank::Six, Suit::Heart)];
        Table::from_piles(tableau, Default::default(), vec![], vec![Card::face_up(Rank::Ace, Suit::Heart)])
    }

    #[test]
    fn test_lifted_run_is_pile_tail() {
        let Pickup::Lifted(dragging) = Idle::new(position()).pick_up(
            Source::Tableau {
                slot: TableauSlot::First,
                start: 1,
            },
            Offset::default(),
        ) else {
            panic!("Seven should lift");
        };
        assert_eq!(dragging.lifted().len(), 1);
        assert_eq!(dragging.lifted()[0].rank(), Rank::Seven);
        assert_eq!(dragging.visible_tableau(TableauSlot::First).len(), 1);
        assert_eq!(dragging.table().tableau(TableauSlot::First).len(), 2);
    }

    #[test]
    fn test_face_down_pick_refused() {
        let source = Source::Tableau {
            slot: TableauSlot::First,
            start: 0,
        };
        match Idle::new(position()).pick_up(source, Offset::default()) {
            Pickup::Refused { idle, error } => {
                assert_eq!(error, MoveError::FaceDown(source));
                assert_eq!(idle.table(), &position());
            }
            Pickup::Lifted(_) => panic!("Face-down card lifted"),
        }
    }

    #[test]
    fn test_waste_view_hides_lifted_top() {
        let Pickup::Lifted(dragging) = Idle::new(position()).pick_up(Source::Waste, Offset::default()) else {
            panic!("Waste top should lift");
        };
        assert!(dragging.visible_waste_top().is_none());
    }

    #[test]
    fn test_release_prefers_foundation() {
        let Pickup::Lifted(dragging) = Idle::new(position()).pick_up(Source::Waste, Offset::default()) else {
            panic!("Waste top should lift");
        };
        let (idle, outcome) = dragging.release(&[
            DropTarget::Tableau(TableauSlot::Third),
            DropTarget::Foundation(FoundationSlot::Second),
        ]);
        assert_eq!(
            outcome,
            Ok(DropOutcome::Committed(Move::new(
                Source::Waste,
                DropTarget::Foundation(FoundationSlot::Second)
            )))
        );
        assert!(idle.table().waste().is_empty());
    }

    #[test]
    fn test_press_while_dragging_refused() {
        let session = Session::new(position());
        let (session, result) = session.press(Press::Waste, Offset::default());
        assert_eq!(result, Ok(PressOutcome::Lifted(Source::Waste)));
        let (session, result) = session.press(Press::Stock, Offset::default());
        assert_eq!(result, Err(PickError::AlreadyDragging(Source::Waste)));
        assert!(session.dragging().is_some());
    }

    #[test]
    fn test_release_without_drag() {
        let (session, outcome) = Session::new(position()).release(&[]);
        assert!(outcome.is_none());
        assert_eq!(session.table(), &position());
    }
}
