//! Deck factory: the 52 cards in play, shuffled.

use super::card::{Card, CardId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Error building a deck from an explicit card order.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DeckError {
    /// The deck does not hold exactly 52 cards.
    #[display("Deck must hold {} cards, got {}", DECK_SIZE, _0)]
    WrongSize(usize),

    /// A card identity appears more than once.
    #[display("Card {} appears more than once", _0)]
    Duplicate(CardId),
}

impl std::error::Error for DeckError {}

/// A complete 52-card deck, all face-down. The last card is the deck's "end",
/// which dealing pops from first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The unshuffled deck in suit-major order.
    pub fn standard() -> Self {
        Self {
            cards: CardId::all().map(Card::from).collect(),
        }
    }

    /// A uniformly shuffled deck (Fisher-Yates) driven by `rng`.
    #[instrument(skip(rng))]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.cards.shuffle(rng);
        debug!(top = %deck.cards[DECK_SIZE - 1].id(), "Shuffled deck");
        deck
    }

    /// A shuffled deck reproducible from `seed`.
    #[instrument]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// A deck in a caller-chosen order.
    ///
    /// The cards must be exactly the 52 distinct identities. They are turned
    /// face-down regardless of how they arrive.
    #[instrument(skip(cards), fields(len = cards.len()))]
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(cards.len()));
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in &cards {
            if !seen.insert(card.id()) {
                return Err(DeckError::Duplicate(card.id()));
            }
        }
        let cards = cards
            .into_iter()
            .map(|mut card| {
                card.turn_down();
                card
            })
            .collect();
        Ok(Self { cards })
    }

    /// A deck from identities in the given order.
    pub fn from_ids(ids: impl IntoIterator<Item = CardId>) -> Result<Self, DeckError> {
        Self::from_cards(ids.into_iter().map(Card::from).collect())
    }

    /// Returns the cards, first to last.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if every card has been dealt.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub(crate) fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn test_standard_deck_order() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.cards()[0].id(), CardId::new(Rank::Ace, Suit::Spade));
        assert_eq!(deck.cards()[51].id(), CardId::new(Rank::King, Suit::Club));
        assert!(deck.cards().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_shuffle_keeps_every_card_once() {
        for seed in 0..50 {
            let deck = Deck::from_seed(seed);
            let ids: HashSet<_> = deck.cards().iter().map(Card::id).collect();
            assert_eq!(ids.len(), DECK_SIZE, "seed {}", seed);
            assert!(deck.cards().iter().all(|c| !c.is_face_up()));
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        assert_eq!(Deck::from_seed(7), Deck::from_seed(7));
        assert_ne!(Deck::from_seed(7), Deck::from_seed(8));
    }

    #[test]
    fn test_from_cards_rejects_short_deck() {
        let ids: Vec<_> = CardId::all().take(51).collect();
        assert_eq!(Deck::from_ids(ids), Err(DeckError::WrongSize(51)));
    }

    #[test]
    fn test_from_cards_rejects_duplicates() {
        let mut ids: Vec<_> = CardId::all().collect();
        ids[1] = ids[0];
        assert_eq!(Deck::from_ids(ids), Err(DeckError::Duplicate(CardId::new(Rank::Ace, Suit::Spade))));
    }

    #[test]
    fn test_from_cards_turns_cards_down() {
        let cards: Vec<_> = CardId::all().map(|id| Card::face_up(id.rank, id.suit)).collect();
        let deck = Deck::from_cards(cards).expect("full deck");
        assert!(deck.cards().iter().all(|c| !c.is_face_up()));
    }
}
