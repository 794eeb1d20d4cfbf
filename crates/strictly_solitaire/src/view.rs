//! Read-only views for whoever draws the table.
//!
//! A view is a snapshot. Face-down cards appear as [`CardFace::Hidden`] and
//! lifted cards appear only in the drag, never in their source pile.

use super::action::Source;
use super::card::{Card, CardId};
use super::drag::{Dragging, Session};
use super::pile::TableauSlot;
use super::pointer::Offset;
use super::table::Table;
use derive_getters::Getters;
use serde::Serialize;
use strum::IntoEnumIterator;

/// How a card should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardFace {
    /// Card back.
    Hidden,
    /// Card front.
    Shown(CardId),
}

impl From<&Card> for CardFace {
    fn from(card: &Card) -> Self {
        if card.is_face_up() {
            CardFace::Shown(card.id())
        } else {
            CardFace::Hidden
        }
    }
}

/// The stock as it should be drawn: how many cards and a face-down marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct StockView {
    /// Cards left in the stock.
    count: usize,
    /// True when there is a face-down card to draw.
    face_down: bool,
}

/// The drag in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct DragView {
    /// Lifted cards, lead card first.
    cards: Vec<CardId>,
    /// Where they came from.
    source: Source,
    /// Pointer-to-anchor offset for drawing them under the cursor.
    offset: Offset,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct TableView {
    /// Tableau piles, left to right, bottom card first.
    tableau: Vec<Vec<CardFace>>,
    /// The stock.
    stock: StockView,
    /// The visible waste top.
    waste_top: Option<CardId>,
    /// Foundation tops, left to right.
    foundations: Vec<Option<CardId>>,
    /// The drag in progress.
    drag: Option<DragView>,
}

fn faces(cards: &[Card]) -> Vec<CardFace> {
    cards.iter().map(CardFace::from).collect()
}

impl TableView {
    /// View of a table with no gesture in progress.
    pub fn of_table(table: &Table) -> Self {
        Self {
            tableau: table.tableau_piles().iter().map(|pile| faces(pile.cards())).collect(),
            stock: StockView {
                count: table.stock().len(),
                face_down: !table.stock().is_empty(),
            },
            waste_top: table.waste().top().map(Card::id),
            foundations: table
                .foundations()
                .iter()
                .map(|pile| pile.top().map(Card::id))
                .collect(),
            drag: None,
        }
    }

    /// View of a table mid-drag.
    pub fn of_dragging(dragging: &Dragging) -> Self {
        let base = Self::of_table(dragging.table());
        Self {
            tableau: TableauSlot::iter()
                .map(|slot| faces(dragging.visible_tableau(slot)))
                .collect(),
            waste_top: dragging.visible_waste_top().map(Card::id),
            drag: Some(DragView {
                cards: dragging.lifted().iter().map(Card::id).collect(),
                source: dragging.source(),
                offset: dragging.offset(),
            }),
            ..base
        }
    }

    /// View of a session in whichever phase it is in.
    pub fn of_session(session: &Session) -> Self {
        match session {
            Session::Idle(idle) => Self::of_table(idle.table()),
            Session::Dragging(dragging) => Self::of_dragging(dragging),
        }
    }
}

impl Session {
    /// Snapshot for drawing.
    pub fn view(&self) -> TableView {
        TableView::of_session(self)
    }
}
