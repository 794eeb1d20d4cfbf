//! Card identity invariants: no card is ever duplicated.

use super::super::table::Table;
use super::super::deck::DECK_SIZE;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every card identity appears at most once on the table.
pub struct UniqueCardsInvariant;

impl Invariant<Table> for UniqueCardsInvariant {
    fn holds(table: &Table) -> bool {
        let mut seen = HashSet::new();
        table
            .piles()
            .flat_map(|pile| pile.cards())
            .all(|card| seen.insert(card.id()))
    }

    fn description() -> &'static str {
        "Every card appears at most once"
    }
}

/// Invariant: the table holds all 52 cards, each exactly once.
///
/// Holds for every dealt game; hand-arranged positions may use fewer cards.
pub struct CompleteDeckInvariant;

impl Invariant<Table> for CompleteDeckInvariant {
    fn holds(table: &Table) -> bool {
        table.card_count() == DECK_SIZE && UniqueCardsInvariant::holds(table)
    }

    fn description() -> &'static str {
        "All 52 cards are in play exactly once"
    }
}
