use crate::{foundation::core::CssPosition, host::tree::LayoutHost};

/// How the caller names the positioning root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootRef<E> {
    /// A concrete element.
    Element(E),
    /// A selector resolved against the host document.
    Selector(String),
}

impl<E> From<&str> for RootRef<E> {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

/// Walk up from `start` (or the body) to the first element whose `position`
/// is `relative`, falling back to the body.
///
/// The computed value wins; the inline declaration is only consulted when the
/// host cannot resolve a computed value.
pub fn find_first_relative_ancestor<H>(host: &H, start: Option<H::Element>) -> Option<H::Element>
where
    H: LayoutHost + ?Sized,
{
    let mut cur = start.or_else(|| host.body());
    while let Some(el) = cur {
        let position = host
            .computed_position(el)
            .or_else(|| host.inline_position(el));
        if position == Some(CssPosition::Relative) {
            return Some(el);
        }
        cur = host.parent(el);
    }
    host.body()
}

/// Resolve the element whose origin absolute coordinates are relative to.
///
/// Without a `root` this is the body. A selector that matches nothing also
/// resolves to the body. Returns `None` only when the host has no document.
pub fn find_positioning_root<H>(host: &H, root: Option<&RootRef<H::Element>>) -> Option<H::Element>
where
    H: LayoutHost + ?Sized,
{
    let body = host.body()?;
    match root {
        None => Some(body),
        Some(RootRef::Element(el)) => find_first_relative_ancestor(host, Some(*el)),
        Some(RootRef::Selector(selector)) => match host.query_selector(selector) {
            Some(el) => find_first_relative_ancestor(host, Some(el)),
            None => {
                tracing::trace!(selector = selector.as_str(), "root selector matched nothing");
                Some(body)
            }
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/root.rs"]
mod tests;
