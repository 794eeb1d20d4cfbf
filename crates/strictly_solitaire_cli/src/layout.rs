//! Table geometry and hit-testing.
//!
//! Turns pointer positions into the engine's [`Press`] and [`DropTarget`]
//! values. The engine never sees any of this.

use crate::config::LayoutConfig;
use strictly_solitaire::{DropTarget, FoundationSlot, Point, Press, Table, TableauSlot};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// An axis-aligned rectangle. Contains its top-left edge, not its
/// bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// Creates a rectangle.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns true if `point` lies inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y && point.y < self.y + self.h
    }
}

/// Pile positions on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    config: LayoutConfig,
}

impl Layout {
    /// Creates a layout from geometry settings.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    fn card_rect(&self, x: i32, y: i32) -> Rect {
        Rect::new(x, y, *self.config.card_width(), *self.config.card_height())
    }

    /// Where the stock sits.
    pub fn stock_rect(&self) -> Rect {
        self.card_rect(*self.config.stock_x(), *self.config.top_row_y())
    }

    /// Where the waste sits.
    pub fn waste_rect(&self) -> Rect {
        self.card_rect(*self.config.waste_x(), *self.config.top_row_y())
    }

    /// Where a foundation sits.
    pub fn foundation_rect(&self, slot: FoundationSlot) -> Rect {
        let x = self.config.foundation_x() + slot.index() as i32 * self.config.pile_spacing();
        self.card_rect(x, *self.config.top_row_y())
    }

    fn tableau_x(&self, slot: TableauSlot) -> i32 {
        self.config.tableau_x() + slot.index() as i32 * self.config.pile_spacing()
    }

    /// Where the `index`-th card of a tableau pile is drawn.
    pub fn tableau_card_rect(&self, slot: TableauSlot, index: usize) -> Rect {
        let y = self.config.tableau_y() + index as i32 * self.config.fan_offset();
        self.card_rect(self.tableau_x(slot), y)
    }

    /// The drop zone of a tableau pile holding `len` cards: the top card's
    /// rectangle stretched down by one fan step. An empty pile's zone starts
    /// one fan step above the pile.
    pub fn tableau_drop_rect(&self, slot: TableauSlot, len: usize) -> Rect {
        let fan = *self.config.fan_offset();
        let y = self.config.tableau_y() + len as i32 * fan - fan;
        Rect::new(
            self.tableau_x(slot),
            y,
            *self.config.card_width(),
            self.config.card_height() + fan,
        )
    }

    /// Resolves a pointer-down.
    ///
    /// Checks the stock, then the waste (only when it has cards), then the
    /// tableau. Where fanned cards overlap, the topmost card under the
    /// pointer wins: pressing the visible strip of a buried face-up card
    /// lifts from that card, and pressing the lower body shared with the
    /// cards above it lifts only the one drawn on top, never the deepest
    /// face-up card under the pointer. Returns the press and the anchor of
    /// what was hit.
    #[instrument(skip(self, table))]
    pub fn hit_press(&self, table: &Table, point: Point) -> Option<(Press, Point)> {
        if self.stock_rect().contains(point) {
            return Some((Press::Stock, self.stock_rect().origin()));
        }
        if !table.waste().is_empty() && self.waste_rect().contains(point) {
            return Some((Press::Waste, self.waste_rect().origin()));
        }
        for slot in TableauSlot::iter() {
            let len = table.tableau(slot).len();
            if let Some(index) = (0..len)
                .rev()
                .find(|&index| self.tableau_card_rect(slot, index).contains(point))
            {
                debug!(%slot, index, "Hit tableau card");
                return Some((Press::Tableau { slot, index }, self.tableau_card_rect(slot, index).origin()));
            }
        }
        None
    }

    /// Every pile whose drop zone contains `point`.
    ///
    /// Tableau drop zones use each pile's full length, lifted cards
    /// included.
    #[instrument(skip(self, table))]
    pub fn drop_targets(&self, table: &Table, point: Point) -> Vec<DropTarget> {
        let foundations = FoundationSlot::iter()
            .filter(|&slot| self.foundation_rect(slot).contains(point))
            .map(DropTarget::Foundation);
        let tableau = TableauSlot::iter()
            .filter(|&slot| self.tableau_drop_rect(slot, table.tableau(slot).len()).contains(point))
            .map(DropTarget::Tableau);
        foundations.chain(tableau).collect()
    }
}
