//! Stock and waste orientation.

use super::super::card::Card;
use super::super::table::Table;
use super::Invariant;

/// Invariant: the stock is entirely face-down and the waste entirely face-up.
pub struct StockWasteOrientationInvariant;

impl Invariant<Table> for StockWasteOrientationInvariant {
    fn holds(table: &Table) -> bool {
        table.stock().cards().iter().all(|card| !card.is_face_up())
            && table.waste().cards().iter().all(Card::is_face_up)
    }

    fn description() -> &'static str {
        "Stock cards are face-down and waste cards face-up"
    }
}
