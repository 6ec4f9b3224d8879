use crate::{
    foundation::core::{Point, Rect},
    placement::model::{Alignment, Position},
};

/// Cross-axis coordinate of the content start edge for one alignment.
pub fn alignment_coordinate(
    align: Alignment,
    anchor_start: f64,
    anchor_size: f64,
    content_size: f64,
) -> f64 {
    match align {
        Alignment::Start => anchor_start,
        Alignment::End => anchor_start + anchor_size - content_size,
        Alignment::Center => anchor_start + (anchor_size - content_size) / 2.0,
    }
}

/// Top-left corner of the content abutting `anchor` on the `position` side.
///
/// Only the content size is read; its origin is ignored.
pub fn content_coords(position: Position, align: Alignment, anchor: Rect, content: Rect) -> Point {
    let x = alignment_coordinate(align, anchor.x0, anchor.width(), content.width());
    let y = alignment_coordinate(align, anchor.y0, anchor.height(), content.height());

    match position {
        Position::Top => Point::new(x, anchor.y0 - content.height()),
        Position::Bottom => Point::new(x, anchor.y1),
        Position::Left => Point::new(anchor.x0 - content.width(), y),
        Position::Right => Point::new(anchor.x1, y),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/coords.rs"]
mod tests;
