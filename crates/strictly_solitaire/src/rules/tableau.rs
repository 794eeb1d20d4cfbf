//! Tableau acceptance: descending rank, alternating color, Kings on empties.

use super::super::card::{Card, Rank};
use super::super::pile::Pile;
use tracing::instrument;

/// Checks whether a run led by `lead` may land on a tableau pile.
///
/// An empty pile takes only a King. Otherwise the pile's top must be face-up,
/// of the opposite color, and exactly one rank above the lead card.
#[instrument(skip_all, fields(lead = %lead, top = ?tableau.top().map(Card::id)))]
pub fn tableau_accepts(lead: &Card, tableau: &Pile) -> bool {
    match tableau.top() {
        None => lead.rank() == Rank::King,
        Some(top) => {
            top.is_face_up()
                && top.color() != lead.color()
                && top.rank().predecessor() == Some(lead.rank())
        }
    }
}

/// Returns true if every adjacent pair in `cards` alternates color and steps
/// down one rank.
pub fn is_alternating_descending(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| {
        pair[0].color() != pair[1].color() && pair[0].rank().predecessor() == Some(pair[1].rank())
    })
}
