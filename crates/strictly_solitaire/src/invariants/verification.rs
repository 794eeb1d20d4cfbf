//! Kani proof harnesses for the move rules.

use crate::card::{Card, Rank, Suit};
use crate::pile::{Pile, PileKind};
use crate::rules::{foundation_accepts_card, tableau_accepts};
use strum::IntoEnumIterator;

fn any_card() -> Card {
    let rank: usize = kani::any();
    let suit: usize = kani::any();
    kani::assume(rank < 13 && suit < 4);
    match (Rank::iter().nth(rank), Suit::iter().nth(suit)) {
        (Some(rank), Some(suit)) => Card::face_up(rank, suit),
        _ => unreachable!(),
    }
}

#[kani::proof]
#[kani::unwind(14)]
fn foundation_accepts_only_successor_of_same_suit() {
    let top = any_card();
    let card = any_card();
    let pile = Pile::with_cards(PileKind::Foundation, vec![top.clone()]);

    if foundation_accepts_card(&card, &pile) {
        assert_eq!(card.suit(), top.suit());
        assert_eq!(card.rank().value(), top.rank().value() + 1);
    }
}

#[kani::proof]
#[kani::unwind(14)]
fn tableau_accepts_alternating_predecessor() {
    let top = any_card();
    let lead = any_card();
    let pile = Pile::with_cards(PileKind::Tableau, vec![top.clone()]);

    if tableau_accepts(&lead, &pile) {
        assert_ne!(lead.color(), top.color());
        assert_eq!(lead.rank().value() + 1, top.rank().value());
    }
}

#[kani::proof]
#[kani::unwind(14)]
fn empty_piles_take_only_ace_or_king() {
    let card = any_card();
    if foundation_accepts_card(&card, &Pile::new(PileKind::Foundation)) {
        assert_eq!(card.rank(), Rank::Ace);
    }
    if tableau_accepts(&card, &Pile::new(PileKind::Tableau)) {
        assert_eq!(card.rank(), Rank::King);
    }
}
