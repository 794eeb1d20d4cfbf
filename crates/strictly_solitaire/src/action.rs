//! First-class action types for solitaire.
//!
//! A move names where cards come from and where they go. It can be checked
//! against a table without applying it.

use super::card::CardId;
use super::pile::{FoundationSlot, TableauSlot};
use serde::{Deserialize, Serialize};

/// Where a lifted card or run comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// The waste top.
    Waste,
    /// The run from `start` to the top of a tableau pile.
    Tableau {
        /// The pile.
        slot: TableauSlot,
        /// Index of the lowest lifted card.
        start: usize,
    },
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Waste => write!(f, "waste"),
            Source::Tableau { slot, start } => write!(f, "{}[{}]", slot, start),
        }
    }
}

/// A pile that lifted cards may be dropped on.
///
/// The ordering is drop priority: foundations before tableau piles, each
/// left to right.
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
)]
pub enum DropTarget {
    /// A foundation pile.
    #[display("{}", _0)]
    Foundation(FoundationSlot),
    /// A tableau pile.
    #[display("{}", _0)]
    Tableau(TableauSlot),
}

/// A move: lift from `source`, land on `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Where the cards come from.
    pub source: Source,
    /// Where the cards go.
    pub destination: DropTarget,
}

impl Move {
    /// Creates a new move.
    pub fn new(source: Source, destination: DropTarget) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// What a stock click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockOutcome {
    /// The stock top went face-up onto the waste.
    Drew(CardId),
    /// The stock was empty; this many waste cards became the new stock.
    Recycled(usize),
}

/// How a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// A target accepted the run and the move was applied.
    Committed(Move),
    /// No target accepted; the table is as it was before the pick-up.
    Reverted,
}

impl DropOutcome {
    /// Returns the applied move, if any.
    pub fn committed(&self) -> Option<Move> {
        match self {
            DropOutcome::Committed(mv) => Some(*mv),
            DropOutcome::Reverted => None,
        }
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The source has no card at the requested place.
    #[display("Nothing to lift from {}", _0)]
    NothingToLift(Source),

    /// The source run includes a face-down card.
    #[display("Cannot lift face-down cards from {}", _0)]
    FaceDown(Source),

    /// The destination pile does not take this card or run.
    #[display("{} does not accept {}", _0, _1)]
    Rejected(DropTarget, CardId),

    /// A run was moved onto the pile it came from.
    #[display("{} cannot be dropped on its own pile", _0)]
    SamePile(TableauSlot),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error that can occur when starting a drag.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PickError {
    /// The source cannot be lifted.
    #[display("{}", _0)]
    NotLiftable(MoveError),

    /// A drag is already in progress.
    #[display("Already dragging from {}", _0)]
    AlreadyDragging(Source),
}

impl std::error::Error for PickError {}

impl From<MoveError> for PickError {
    fn from(err: MoveError) -> Self {
        PickError::NotLiftable(err)
    }
}
