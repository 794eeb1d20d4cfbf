//! Strictly Solitaire - a type-safe Klondike rules engine
//!
//! The engine owns the cards and the rules. Drawing and hit-testing belong to
//! the caller, which reads [`TableView`] snapshots and feeds resolved pointer
//! input into a [`Session`].
//!
//! # Architecture
//!
//! - **Cards & deck**: identities, colors, a fair shuffle
//! - **Table**: the deal, the stock click, validated moves
//! - **Rules**: pure legality predicates
//! - **Contracts & invariants**: pre/postconditions around every move
//! - **Drag**: `Idle` / `Dragging` typestates with deferred removal
//!
//! # Example
//!
//! ```
//! use strictly_solitaire::{Offset, Press, Session, Table};
//!
//! let session = Session::new(Table::from_seed(42));
//! let (session, outcome) = session.press(Press::Stock, Offset::default());
//! assert!(outcome.is_ok());
//! assert_eq!(session.table().waste().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod card;
mod contracts;
mod deck;
mod drag;
mod pile;
mod pointer;
mod table;
mod view;

pub mod invariants;
pub mod rules;

// Crate-level exports - Cards
pub use card::{Card, CardId, Color, Rank, Suit};

// Crate-level exports - Deck
pub use deck::{DECK_SIZE, Deck, DeckError};

// Crate-level exports - Piles and table
pub use pile::{FoundationSlot, Pile, PileKind, TableauSlot};
pub use table::{FOUNDATION_PILES, TABLEAU_PILES, Table};

// Crate-level exports - Actions
pub use action::{DropOutcome, DropTarget, Move, MoveError, PickError, Source, StockOutcome};
pub use contracts::{
    Contract, DestinationAccepts, DistinctPiles, LegalMove, MoveContract, SequencePreserved, SourceLiftable,
};

// Crate-level exports - Drag session
pub use drag::{Dragging, Idle, Pickup, PressOutcome, Session};
pub use pointer::{Offset, Point, Press};

// Crate-level exports - Views
pub use view::{CardFace, DragView, StockView, TableView};
