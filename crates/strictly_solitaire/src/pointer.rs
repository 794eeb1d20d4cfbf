//! Pointer input as the engine sees it.
//!
//! The engine knows no screen geometry. The caller hit-tests a pointer
//! position against its own layout and hands over the result.

use super::pile::TableauSlot;
use serde::{Deserialize, Serialize};

/// A position in the caller's logical coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Vector from the pointer to the lifted cards' anchor.
///
/// Keeps a dragged run at the same spot under the cursor instead of
/// snapping its corner to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Offset {
    /// Horizontal component.
    pub dx: i32,
    /// Vertical component.
    pub dy: i32,
}

impl Offset {
    /// Offset that carries `pointer` to `anchor`.
    pub fn between(pointer: Point, anchor: Point) -> Self {
        Self {
            dx: anchor.x - pointer.x,
            dy: anchor.y - pointer.y,
        }
    }

    /// Where to draw the lifted cards while the pointer is at `pointer`.
    pub fn apply(self, pointer: Point) -> Point {
        Point::new(pointer.x + self.dx, pointer.y + self.dy)
    }
}

/// What a pointer-down landed on, as resolved by the caller's hit-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Press {
    /// The stock. A click, not a drag.
    Stock,
    /// The waste top.
    Waste,
    /// A card in a tableau pile.
    Tableau {
        /// The pile.
        slot: TableauSlot,
        /// Index of the card within the pile, bottom first.
        index: usize,
    },
}
