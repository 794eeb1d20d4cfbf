//! Foundation acceptance: per-suit, strictly A through K.

use super::super::card::{Card, Rank};
use super::super::pile::Pile;
use tracing::instrument;

/// Checks whether a single card may land on a foundation.
///
/// An empty foundation takes only an Ace. Otherwise the card must match the
/// top card's suit and be its immediate successor.
#[instrument(skip_all, fields(card = %card, top = ?foundation.top().map(Card::id)))]
pub fn foundation_accepts_card(card: &Card, foundation: &Pile) -> bool {
    match foundation.top() {
        None => card.rank() == Rank::Ace,
        Some(top) => card.suit() == top.suit() && top.rank().successor() == Some(card.rank()),
    }
}

/// Checks whether a lifted run may land on a foundation.
///
/// Only single cards move to a foundation.
pub fn foundation_accepts(run: &[Card], foundation: &Pile) -> bool {
    match run {
        [card] => foundation_accepts_card(card, foundation),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::pile::PileKind;

    fn foundation(cards: Vec<Card>) -> Pile {
        Pile::with_cards(PileKind::Foundation, cards)
    }

    #[test]
    fn test_empty_foundation_takes_ace() {
        let empty = foundation(vec![]);
        assert!(foundation_accepts_card(&Card::face_up(Rank::Ace, Suit::Heart), &empty));
        assert!(!foundation_accepts_card(&Card::face_up(Rank::Two, Suit::Heart), &empty));
    }

    #[test]
    fn test_successor_same_suit() {
        let f = foundation(vec![Card::face_up(Rank::Ace, Suit::Heart)]);
        assert!(foundation_accepts_card(&Card::face_up(Rank::Two, Suit::Heart), &f));
        assert!(!foundation_accepts_card(&Card::face_up(Rank::Three, Suit::Heart), &f));
        assert!(!foundation_accepts_card(&Card::face_up(Rank::Two, Suit::Diamond), &f));
    }

    #[test]
    fn test_no_wraparound_after_king() {
        let f = foundation(vec![Card::face_up(Rank::King, Suit::Club)]);
        assert!(!foundation_accepts_card(&Card::face_up(Rank::Ace, Suit::Club), &f));
    }

    #[test]
    fn test_runs_never_go_to_foundation() {
        let f = foundation(vec![Card::face_up(Rank::Ace, Suit::Spade)]);
        let run = vec![
            Card::face_up(Rank::Two, Suit::Spade),
            Card::face_up(Rank::Ace, Suit::Heart),
        ];
        assert!(!foundation_accepts(&run, &f));
        assert!(foundation_accepts(&run[..1], &f));
        assert!(!foundation_accepts(&[], &f));
    }
}
