use crate::{
    foundation::core::Vec2,
    placement::model::{Offset, Position},
};

/// Translate an [`Offset`] into a screen-space displacement for `position`.
///
/// Positive main distance always moves the content away from the anchor;
/// the cross distance is added unsigned on the perpendicular axis.
pub fn offset_coords(position: Position, offset: Offset) -> Vec2 {
    let (main, cross) = offset.main_cross();
    match position {
        Position::Left => Vec2::new(-main, cross),
        Position::Right => Vec2::new(main, cross),
        Position::Top => Vec2::new(cross, -main),
        Position::Bottom => Vec2::new(cross, main),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/offset.rs"]
mod tests;
