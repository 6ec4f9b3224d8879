use crate::{
    foundation::core::{Point, Rect, Vec2},
    placement::{
        auto::auto_placement,
        clamp::stick_to_edges,
        coords::content_coords,
        model::{Placement, PlacementConfig},
        offset::offset_coords,
        overflow::{Overflow, content_overflow},
    },
};

/// Result of one placement computation, in viewport space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlacementOutcome {
    /// Top-left corner of the content.
    pub coords: Point,
    /// Placement actually used (differs from the request after a flip).
    pub placement: Placement,
    /// Offset displacement applied for [`PlacementOutcome::placement`].
    pub offset: Vec2,
    /// Remaining overflow of the content at [`PlacementOutcome::coords`].
    pub overflow: Overflow,
}

/// Place `content` next to `anchor` inside `viewport`.
///
/// Pure and framework-independent: base coordinates, then offset, then an
/// optional single auto-placement flip, then optional edge clamping.
#[tracing::instrument(level = "trace", skip_all, fields(placement = %placement))]
pub fn compute_placement(
    anchor: Rect,
    content: Rect,
    viewport: Rect,
    placement: Placement,
    config: &PlacementConfig,
) -> PlacementOutcome {
    let place = |placement: Placement| -> (Point, Vec2) {
        let base = content_coords(placement.position, placement.align, anchor, content);
        let offset = config
            .offset
            .map(|o| offset_coords(placement.position, o))
            .unwrap_or(Vec2::ZERO);
        (base + offset, offset)
    };

    let mut resolved = placement;
    let (mut coords, mut offset) = place(placement);

    if config.auto_placement {
        let flipped = auto_placement(placement, coords, content, viewport);
        if flipped != placement {
            tracing::debug!(from = %placement, to = %flipped, "content overflows, flipping");
            resolved = flipped;
            (coords, offset) = place(flipped);
        }
    }

    if config.stick_to_edges {
        coords = stick_to_edges(coords, offset, content, anchor, viewport);
    }

    PlacementOutcome {
        coords,
        placement: resolved,
        offset,
        overflow: content_overflow(coords, content, viewport),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/resolve.rs"]
mod tests;
