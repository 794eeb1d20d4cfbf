//! Piles and pile addressing.
//!
//! Tableau and foundation piles are addressed by closed enums so that an
//! out-of-range pile index cannot be expressed.

use super::card::Card;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Which rules a pile follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum PileKind {
    /// One of the seven main playing piles.
    Tableau,
    /// One of the four per-suit ascending piles.
    Foundation,
    /// The face-down draw pile.
    Stock,
    /// The face-up pile fed from the stock.
    Waste,
}

/// One of the seven tableau piles, left to right.
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
pub enum TableauSlot {
    /// Leftmost pile, dealt one card.
    #[display("T1")]
    First,
    /// Dealt two cards.
    #[display("T2")]
    Second,
    /// Dealt three cards.
    #[display("T3")]
    Third,
    /// Dealt four cards.
    #[display("T4")]
    Fourth,
    /// Dealt five cards.
    #[display("T5")]
    Fifth,
    /// Dealt six cards.
    #[display("T6")]
    Sixth,
    /// Rightmost pile, dealt seven cards.
    #[display("T7")]
    Seventh,
}

impl TableauSlot {
    /// Zero-based position from the left.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Slot for a zero-based position, or `None` past the seventh pile.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

/// One of the four foundation piles, left to right.
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
pub enum FoundationSlot {
    /// Leftmost foundation.
    #[display("F1")]
    First,
    /// Second foundation.
    #[display("F2")]
    Second,
    /// Third foundation.
    #[display("F3")]
    Third,
    /// Rightmost foundation.
    #[display("F4")]
    Fourth,
}

impl FoundationSlot {
    /// Zero-based position from the left.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Slot for a zero-based position, or `None` past the fourth pile.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

/// An ordered stack of cards. The last card is the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    kind: PileKind,
    cards: Vec<Card>,
}

impl Pile {
    /// Creates an empty pile.
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    /// Creates a pile holding `cards`, bottom first.
    pub fn with_cards(kind: PileKind, cards: Vec<Card>) -> Self {
        Self { kind, cards }
    }

    /// Returns the pile kind.
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    /// Returns the cards, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the top card.
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the pile holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The run from `start` to the top, if `start` is in range.
    pub fn run_from(&self, start: usize) -> Option<&[Card]> {
        self.cards.get(start..).filter(|run| !run.is_empty())
    }

    /// Index of the lowest face-up card, if any.
    pub fn face_up_start(&self) -> Option<usize> {
        self.cards.iter().position(Card::is_face_up)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes and returns the run from `start` to the top.
    pub(crate) fn split_run(&mut self, start: usize) -> Vec<Card> {
        self.cards.split_off(start)
    }

    pub(crate) fn extend(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// Turns a face-down top card face-up. Returns true if it flipped.
    pub(crate) fn expose_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if !top.is_face_up() => {
                top.turn_up();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}
