//! Foundation invariant: each foundation is A, 2, 3, ... of one suit.

use super::super::card::{Card, Rank};
use super::super::table::Table;
use super::Invariant;

/// Invariant: every foundation holds `A..=top` of a single suit, in order,
/// with no gaps.
pub struct FoundationSequenceInvariant;

/// Returns true if `cards` is exactly `A, 2, ..., n` of one suit.
pub fn is_foundation_sequence(cards: &[Card]) -> bool {
    let Some(first) = cards.first() else {
        return true;
    };
    first.rank() == Rank::Ace
        && cards.iter().all(|card| card.suit() == first.suit() && card.is_face_up())
        && cards
            .windows(2)
            .all(|pair| pair[0].rank().successor() == Some(pair[1].rank()))
}

impl Invariant<Table> for FoundationSequenceInvariant {
    fn holds(table: &Table) -> bool {
        table
            .foundations()
            .iter()
            .all(|pile| is_foundation_sequence(pile.cards()))
    }

    fn description() -> &'static str {
        "Foundations are built A to K in a single suit"
    }
}
