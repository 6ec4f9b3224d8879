use std::fmt;

use crate::{
    binder::style::StyleRecord,
    foundation::core::{CssPosition, Rect, Vec2},
};

/// A document the binder can measure and restyle.
///
/// Implementors wrap whatever owns real layout (a browser DOM, a retained UI
/// tree, a test fixture). Every measurement is optional: `None` means the
/// element is not laid out yet, and the binder skips the pass.
pub trait LayoutHost {
    /// Concrete element handle. Handles are resolved once at the boundary,
    /// the binder never inspects them.
    type Element: Copy + Eq + fmt::Debug;

    /// The document body, or `None` when no document is available.
    fn body(&self) -> Option<Self::Element>;

    /// Parent element, `None` at the top of the tree.
    fn parent(&self, el: Self::Element) -> Option<Self::Element>;

    /// First element matching `selector` in document order.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Border box in viewport coordinates.
    fn bounding_rect(&self, el: Self::Element) -> Option<Rect>;

    /// Width of the left and top borders (`clientLeft`, `clientTop`).
    fn client_offset(&self, el: Self::Element) -> Vec2;

    /// Resolved (computed) value of `position`, if the host can resolve it.
    fn computed_position(&self, el: Self::Element) -> Option<CssPosition>;

    /// Inline `position` declared on the element itself.
    fn inline_position(&self, _el: Self::Element) -> Option<CssPosition> {
        None
    }

    /// Replace the positioning style of `el` with `style`.
    fn apply_style(&mut self, el: Self::Element, style: &StyleRecord);
}
