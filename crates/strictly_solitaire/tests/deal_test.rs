//! Tests for the deck factory and the deal.

use std::collections::HashSet;
use strictly_solitaire::invariants::{CompleteDeckInvariant, Invariant};
use strictly_solitaire::{Card, CardId, DECK_SIZE, Deck, Table, TableauSlot};
use strum::IntoEnumIterator;

#[test]
fn test_deck_integrity_across_seeds() {
    for seed in 0..200 {
        let deck = Deck::from_seed(seed);
        let ids: HashSet<CardId> = deck.cards().iter().map(Card::id).collect();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(ids, CardId::all().collect::<HashSet<_>>(), "seed {}", seed);
    }
}

#[test]
fn test_deal_conservation() {
    for seed in 0..100 {
        let table = Table::from_seed(seed);
        assert_eq!(table.card_count(), 52);
        assert!(CompleteDeckInvariant::holds(&table));

        for slot in TableauSlot::iter() {
            let pile = table.tableau(slot);
            assert_eq!(pile.len(), slot.index() + 1);
            let face_up: Vec<_> = pile.cards().iter().filter(|c| c.is_face_up()).collect();
            assert_eq!(face_up.len(), 1);
            assert_eq!(Some(face_up[0]), pile.top());
        }

        assert_eq!(table.stock().len(), 24);
        assert!(table.stock().cards().iter().all(|c| !c.is_face_up()));
        assert!(table.waste().is_empty());
        assert!(table.foundations().iter().all(|f| f.is_empty()));
    }
}

#[test]
fn test_deal_is_deterministic_for_a_deck() {
    let deck = Deck::from_seed(31);
    assert_eq!(Table::deal(deck.clone()), Table::deal(deck));
}

#[test]
fn test_stock_keeps_deck_order() {
    let deck = Deck::from_seed(12);
    let expected: Vec<CardId> = deck.cards()[..24].iter().map(Card::id).collect();
    let table = Table::deal(deck);
    let stock: Vec<CardId> = table.stock().cards().iter().map(Card::id).collect();
    assert_eq!(stock, expected);
}
