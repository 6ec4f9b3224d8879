use std::fmt;

use crate::{
    binder::style::StyleRecord,
    foundation::core::{Rect, Vec2},
    foundation::error::PlacementResult,
    host::{
        root::{RootRef, find_positioning_root},
        tree::LayoutHost,
    },
    placement::{
        model::{Placement, PlacementConfig},
        resolve::{PlacementOutcome, compute_placement},
    },
};

/// Options for a [`DropdownBinder`]. Everything defaults to off.
#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOptions<E> {
    /// Placement behavior toggles and offset.
    pub config: PlacementConfig,
    /// Positioning root; the body when unset.
    pub root: Option<RootRef<E>>,
    /// Element whose rect bounds auto-placement and edge clamping; the
    /// positioning root's rect when unset.
    pub viewport: Option<E>,
}

impl<E> Default for DropdownOptions<E> {
    fn default() -> Self {
        Self {
            config: PlacementConfig::default(),
            root: None,
            viewport: None,
        }
    }
}

impl<E> From<PlacementConfig> for DropdownOptions<E> {
    fn from(config: PlacementConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

/// Why a pass produced no style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The host has no document to resolve a root in.
    NoRoot,
    /// The positioning root is not laid out.
    RootUnmeasured,
    /// No anchor element, or it is not laid out.
    AnchorUnmeasured,
    /// No content element, or it is not laid out.
    ContentUnmeasured,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoRoot => "no positioning root",
            Self::RootUnmeasured => "root not measurable",
            Self::AnchorUnmeasured => "anchor not measurable",
            Self::ContentUnmeasured => "content not measurable",
        })
    }
}

/// A pass that wrote a style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedPass {
    /// Style written to the content element, in root-relative space.
    pub style: StyleRecord,
    /// Placement outcome, in viewport space.
    pub outcome: PlacementOutcome,
}

/// Result of [`DropdownBinder::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pass {
    /// Inputs were missing; nothing was written.
    Skipped(SkipReason),
    /// Inputs match the previous pass; nothing was written.
    Unchanged,
    /// A new style was computed and written.
    Applied(AppliedPass),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PassInputs {
    anchor: Rect,
    content: Rect,
    root: Rect,
    client: Vec2,
    viewport: Rect,
    placement: Placement,
    config: PlacementConfig,
}

/// Keeps one content element placed next to one anchor element.
///
/// Call [`DropdownBinder::update`] whenever the host reports that the
/// anchor, content or viewport moved or resized. A pass is a pure function of
/// the current measurements; the only side effect is the style write, and
/// it is skipped when nothing changed since the last write.
#[derive(Clone, Debug)]
pub struct DropdownBinder<E> {
    anchor: Option<E>,
    content: Option<E>,
    placement: Placement,
    options: DropdownOptions<E>,
    anchor_rect: Option<Rect>,
    content_rect: Option<Rect>,
    resolved: Option<Placement>,
    last: Option<PassInputs>,
}

impl<E> DropdownBinder<E>
where
    E: Copy + Eq + fmt::Debug,
{
    /// Bind `content` to `anchor`.
    pub fn new(
        anchor: Option<E>,
        content: Option<E>,
        placement: Placement,
        options: DropdownOptions<E>,
    ) -> PlacementResult<Self> {
        options.config.validate()?;
        Ok(Self {
            anchor,
            content,
            placement,
            options,
            anchor_rect: None,
            content_rect: None,
            resolved: None,
            last: None,
        })
    }

    /// Requested placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Current options.
    pub fn options(&self) -> &DropdownOptions<E> {
        &self.options
    }

    /// Anchor rect measured by the last pass.
    pub fn anchor_rect(&self) -> Option<Rect> {
        self.anchor_rect
    }

    /// Content rect measured by the last pass.
    pub fn content_rect(&self) -> Option<Rect> {
        self.content_rect
    }

    /// Placement used by the last applied pass, after any flip.
    pub fn resolved_placement(&self) -> Option<Placement> {
        self.resolved
    }

    /// Replace the anchor element.
    pub fn set_anchor(&mut self, anchor: Option<E>) {
        self.anchor = anchor;
        self.invalidate();
    }

    /// Replace the content element.
    pub fn set_content(&mut self, content: Option<E>) {
        self.content = content;
        self.invalidate();
    }

    /// Replace the requested placement.
    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
        self.invalidate();
    }

    /// Replace the options. Invalid options leave the binder untouched.
    pub fn set_options(&mut self, options: DropdownOptions<E>) -> PlacementResult<()> {
        options.config.validate()?;
        self.options = options;
        self.invalidate();
        Ok(())
    }

    /// Force the next [`DropdownBinder::update`] to write even if the inputs
    /// did not change.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Measure, place and restyle the content.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(anchor = ?self.anchor, content = ?self.content)
    )]
    pub fn update<H>(&mut self, host: &mut H) -> Pass
    where
        H: LayoutHost<Element = E> + ?Sized,
    {
        let Some(root) = find_positioning_root(&*host, self.options.root.as_ref()) else {
            return self.skip(SkipReason::NoRoot);
        };

        self.anchor_rect = self.anchor.and_then(|el| host.bounding_rect(el));
        self.content_rect = self.content.and_then(|el| host.bounding_rect(el));

        let Some(anchor) = self.anchor_rect else {
            return self.skip(SkipReason::AnchorUnmeasured);
        };
        let (Some(content_el), Some(content)) = (self.content, self.content_rect) else {
            return self.skip(SkipReason::ContentUnmeasured);
        };
        let Some(root_rect) = host.bounding_rect(root) else {
            return self.skip(SkipReason::RootUnmeasured);
        };

        let client = host.client_offset(root);
        let viewport = self
            .options
            .viewport
            .and_then(|el| host.bounding_rect(el))
            .unwrap_or(root_rect);

        let inputs = PassInputs {
            anchor,
            content,
            root: root_rect,
            client,
            viewport,
            placement: self.placement,
            config: self.options.config,
        };
        if self.last == Some(inputs) {
            tracing::trace!("inputs unchanged");
            return Pass::Unchanged;
        }

        let outcome = compute_placement(
            anchor,
            content,
            viewport,
            self.placement,
            &self.options.config,
        );

        let coords = outcome.coords - (root_rect.origin().to_vec2() + client);
        let mut style = StyleRecord::absolute(coords);
        if self.options.config.keep_anchor_width {
            style = style.with_width(anchor.width());
        }
        host.apply_style(content_el, &style);

        self.last = Some(inputs);
        self.resolved = Some(outcome.placement);
        Pass::Applied(AppliedPass { style, outcome })
    }

    fn skip(&mut self, reason: SkipReason) -> Pass {
        tracing::trace!(%reason, "placement pass skipped");
        self.last = None;
        Pass::Skipped(reason)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/binder/dropdown.rs"]
mod tests;
