//! Tableau orientation invariant: face-down cards never sit on face-up ones.

use super::super::card::Card;
use super::super::pile::Pile;
use super::super::table::Table;
use super::Invariant;

/// Invariant: each tableau pile is a face-down prefix followed by a single
/// face-up suffix, and a non-empty pile always shows its top card.
pub struct FaceUpSuffixInvariant;

/// Checks one tableau pile.
pub fn has_face_up_suffix(pile: &Pile) -> bool {
    let cards = pile.cards();
    let first_up = pile.face_up_start().unwrap_or(cards.len());
    cards[first_up..].iter().all(Card::is_face_up) && pile.top().is_none_or(Card::is_face_up)
}

impl Invariant<Table> for FaceUpSuffixInvariant {
    fn holds(table: &Table) -> bool {
        table.tableau_piles().iter().all(has_face_up_suffix)
    }

    fn description() -> &'static str {
        "Tableau piles show a single face-up suffix including the top card"
    }
}
