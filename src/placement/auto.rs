use crate::{
    foundation::core::{Point, Rect},
    placement::{
        model::{Alignment, Placement, Position},
        overflow::content_overflow,
    },
};

/// Flip `placement` to the opposite side when content at `coords` overflows
/// the viewport edge it faces.
///
/// The new alignment leans toward the open space on the cross axis. This is a
/// single pass: overflow on both cross-axis edges, or overflow that persists
/// after the flip, is left as is.
pub fn auto_placement(
    placement: Placement,
    coords: Point,
    content: Rect,
    viewport: Rect,
) -> Placement {
    let overflow = content_overflow(coords, content, viewport);

    if overflow.on(placement.position) == 0.0 {
        return placement;
    }

    let position = placement.position.opposite();
    let (start_side, end_side) = if position.is_vertical() {
        (Position::Left, Position::Right)
    } else {
        (Position::Top, Position::Bottom)
    };

    let align = if overflow.on(start_side) > 0.0 {
        Alignment::Start
    } else if overflow.on(end_side) > 0.0 {
        Alignment::End
    } else {
        Alignment::Center
    };

    Placement::new(position, align)
}

#[cfg(test)]
#[path = "../../tests/unit/placement/auto.rs"]
mod tests;
