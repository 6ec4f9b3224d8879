use crate::{
    foundation::core::{Point, Rect},
    placement::model::Position,
};

/// How far content protrudes past each viewport edge. Every side is `>= 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Overflow {
    /// Protrusion above the viewport top.
    pub top: f64,
    /// Protrusion below the viewport bottom.
    pub bottom: f64,
    /// Protrusion past the viewport left edge.
    pub left: f64,
    /// Protrusion past the viewport right edge.
    pub right: f64,
}

impl Overflow {
    /// Protrusion on the edge facing `side`.
    pub fn on(&self, side: Position) -> f64 {
        match side {
            Position::Top => self.top,
            Position::Bottom => self.bottom,
            Position::Left => self.left,
            Position::Right => self.right,
        }
    }

    /// `true` when the content fits entirely.
    pub fn is_none(&self) -> bool {
        Position::ALL.iter().all(|&side| self.on(side) == 0.0)
    }
}

/// Overflow of content with top-left corner `coords` against `viewport`.
pub fn content_overflow(coords: Point, content: Rect, viewport: Rect) -> Overflow {
    Overflow {
        top: (viewport.y0 - coords.y).max(0.0),
        bottom: (coords.y + content.height() - viewport.y1).max(0.0),
        left: (viewport.x0 - coords.x).max(0.0),
        right: (coords.x + content.width() - viewport.x1).max(0.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/overflow.rs"]
mod tests;
