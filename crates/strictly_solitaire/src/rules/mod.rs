//! Move legality rules for Klondike.
//!
//! Pure predicates over a candidate card or run and a pile snapshot. None of
//! them mutate anything; callers decide what to do with the verdict.

pub mod foundation;
pub mod source;
pub mod tableau;

pub use foundation::{foundation_accepts, foundation_accepts_card};
pub use source::{can_lift_from_tableau, can_lift_from_waste};
pub use tableau::{is_alternating_descending, tableau_accepts};
