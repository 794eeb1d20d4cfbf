//! Tableau sequencing invariant.

use super::super::pile::Pile;
use super::super::rules::is_alternating_descending;
use super::super::table::Table;
use super::Invariant;

/// Invariant: the face-up part of every tableau pile alternates color and
/// descends one rank at a time from bottom to top.
///
/// Holds for any table reached by play from a deal. Arranged positions may
/// break it, so moves check that it is preserved pile by pile instead (see
/// [`SequencePreserved`](crate::SequencePreserved)).
pub struct TableauAlternationInvariant;

/// Returns true if the face-up part of `pile` is an alternating descending
/// run.
pub fn face_up_run_in_sequence(pile: &Pile) -> bool {
    pile.face_up_start()
        .and_then(|start| pile.run_from(start))
        .is_none_or(is_alternating_descending)
}

impl Invariant<Table> for TableauAlternationInvariant {
    fn holds(table: &Table) -> bool {
        table.tableau_piles().iter().all(face_up_run_in_sequence)
    }

    fn description() -> &'static str {
        "Face-up tableau cards alternate color and descend in rank"
    }
}
