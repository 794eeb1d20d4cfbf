//! Source eligibility: what may be lifted to start a drag.

use super::super::card::Card;
use super::super::pile::Pile;

/// Checks whether the run `pile[start..]` may be lifted.
///
/// The card at `start` must exist and, like everything above it, be
/// face-up. The run itself need not be in sequence; only the destination
/// constrains legality.
pub fn can_lift_from_tableau(pile: &Pile, start: usize) -> bool {
    pile.run_from(start)
        .is_some_and(|run| run.iter().all(Card::is_face_up))
}

/// Checks whether the waste top may be lifted.
pub fn can_lift_from_waste(waste: &Pile) -> bool {
    waste.top().is_some_and(Card::is_face_up)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::pile::PileKind;

    #[test]
    fn test_lift_requires_face_up() {
        let pile = Pile::with_cards(
            PileKind::Tableau,
            vec![
                Card::new(Rank::King, Suit::Heart),
                Card::face_up(Rank::Nine, Suit::Club),
                Card::face_up(Rank::Two, Suit::Club),
            ],
        );
        assert!(!can_lift_from_tableau(&pile, 0));
        assert!(can_lift_from_tableau(&pile, 1));
        assert!(can_lift_from_tableau(&pile, 2));
        assert!(!can_lift_from_tableau(&pile, 3));
    }

    #[test]
    fn test_waste_lift() {
        let mut waste = Pile::new(PileKind::Waste);
        assert!(!can_lift_from_waste(&waste));
        waste.push(Card::face_up(Rank::Ace, Suit::Spade));
        assert!(can_lift_from_waste(&waste));
    }
}
