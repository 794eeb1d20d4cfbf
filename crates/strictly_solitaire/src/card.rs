//! Core card types for solitaire.
//!
//! A card's identity (suit and rank) never changes. Only its orientation
//! does, and only the engine flips it.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// One of the four French suits.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Suit {
    /// Spades (black).
    #[display("♠")]
    Spade,
    /// Hearts (red).
    #[display("♥")]
    Heart,
    /// Diamonds (red).
    #[display("♦")]
    Diamond,
    /// Clubs (black).
    #[display("♣")]
    Club,
}

impl Suit {
    /// Returns the color of this suit.
    pub fn color(self) -> Color {
        match self {
            Suit::Heart | Suit::Diamond => Color::Red,
            Suit::Spade | Suit::Club => Color::Black,
        }
    }
}

/// Card color, derived from the suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clubs.
    Black,
}

/// Card rank, ordered Ace (low) through King.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[repr(u8)]
pub enum Rank {
    /// Ace, the lowest rank.
    #[display("A")]
    Ace = 1,
    /// Pip card 2.
    #[display("2")]
    Two,
    /// Pip card 3.
    #[display("3")]
    Three,
    /// Pip card 4.
    #[display("4")]
    Four,
    /// Pip card 5.
    #[display("5")]
    Five,
    /// Pip card 6.
    #[display("6")]
    Six,
    /// Pip card 7.
    #[display("7")]
    Seven,
    /// Pip card 8.
    #[display("8")]
    Eight,
    /// Pip card 9.
    #[display("9")]
    Nine,
    /// Pip card 10.
    #[display("10")]
    Ten,
    /// Jack.
    #[display("J")]
    Jack,
    /// Queen.
    #[display("Q")]
    Queen,
    /// King, the highest rank. Only a King may start an empty tableau pile.
    #[display("K")]
    King,
}

impl Rank {
    /// Numeric value, Ace = 1 through King = 13.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// The next rank up, or `None` for a King (no wraparound).
    pub fn successor(self) -> Option<Rank> {
        Rank::iter().find(|r| r.value() == self.value() + 1)
    }

    /// The next rank down, or `None` for an Ace.
    pub fn predecessor(self) -> Option<Rank> {
        Rank::iter().find(|r| r.value() + 1 == self.value())
    }
}

/// The identity of a card: suit plus rank.
///
/// Exactly 52 identities exist and each is in play exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId {
    /// The suit.
    pub suit: Suit,
    /// The rank.
    pub rank: Rank,
}

impl CardId {
    /// Creates a card identity.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Returns the color of this card.
    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// All 52 identities in suit-major order (♠ ♥ ♦ ♣, each A through K).
    pub fn all() -> impl Iterator<Item = CardId> {
        Suit::iter().flat_map(|suit| Rank::iter().map(move |rank| CardId::new(rank, suit)))
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// A playing card: fixed identity plus orientation.
///
/// Cards are not `Copy`; they move between piles by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face_up: bool,
}

impl Card {
    /// Creates a face-down card.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: CardId::new(rank, suit),
            face_up: false,
        }
    }

    /// Creates a face-up card.
    pub fn face_up(rank: Rank, suit: Suit) -> Self {
        Self {
            id: CardId::new(rank, suit),
            face_up: true,
        }
    }

    /// Returns the card's identity.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Returns the suit.
    pub fn suit(&self) -> Suit {
        self.id.suit
    }

    /// Returns the rank.
    pub fn rank(&self) -> Rank {
        self.id.rank
    }

    /// Returns the color.
    pub fn color(&self) -> Color {
        self.id.color()
    }

    /// Returns true if the card is face-up.
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub(crate) fn turn_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn turn_down(&mut self) {
        self.face_up = false;
    }
}

impl From<CardId> for Card {
    fn from(id: CardId) -> Self {
        Self { id, face_up: false }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}", self.id)
        } else {
            write!(f, "##")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(Suit::Heart.color(), Color::Red);
        assert_eq!(Suit::Diamond.color(), Color::Red);
        assert_eq!(Suit::Spade.color(), Color::Black);
        assert_eq!(Suit::Club.color(), Color::Black);
    }

    #[test]
    fn test_rank_order_and_neighbours() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::Ace.successor(), Some(Rank::Two));
        assert_eq!(Rank::Ten.successor(), Some(Rank::Jack));
        assert_eq!(Rank::King.successor(), None);
        assert_eq!(Rank::Ace.predecessor(), None);
        assert_eq!(Rank::King.predecessor(), Some(Rank::Queen));
    }

    #[test]
    fn test_all_identities_are_distinct() {
        let ids: std::collections::HashSet<_> = CardId::all().collect();
        assert_eq!(ids.len(), 52);
    }

    #[test]
    fn test_display() {
        assert_eq!(CardId::new(Rank::Ace, Suit::Spade).to_string(), "A♠");
        assert_eq!(CardId::new(Rank::Ten, Suit::Heart).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Queen, Suit::Diamond).to_string(), "##");
        assert_eq!(Card::face_up(Rank::Queen, Suit::Diamond).to_string(), "Q♦");
    }
}
