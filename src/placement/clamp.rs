use crate::{
    foundation::core::{Point, Rect, Vec2},
    placement::overflow::content_overflow,
};

/// Push content at `coords` back inside `viewport`, without letting it detach
/// from `anchor`.
///
/// Each axis is shifted by the overflow on both of its edges, then clamped so
/// some content edge still touches the (offset) anchor. When the content is
/// larger than the viewport, staying attached wins.
pub fn stick_to_edges(
    coords: Point,
    offset: Vec2,
    content: Rect,
    anchor: Rect,
    viewport: Rect,
) -> Point {
    let overflow = content_overflow(coords, content, viewport);

    let x = coords.x - overflow.right + overflow.left;
    let y = coords.y - overflow.bottom + overflow.top;

    // Anchor and content must keep sharing at least one edge on each axis.
    Point::new(
        clamp(anchor.x0 + offset.x - content.width(), x, anchor.x1 + offset.x),
        clamp(anchor.y0 + offset.y - content.height(), y, anchor.y1 + offset.y),
    )
}

fn clamp(min: f64, v: f64, max: f64) -> f64 {
    v.min(max).max(min)
}

#[cfg(test)]
#[path = "../../tests/unit/placement/clamp.rs"]
mod tests;
