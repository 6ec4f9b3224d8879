//! Anchored placement for floating UI content.
//!
//! `anchored` computes where a floating element (dropdown panel, popover,
//! tooltip) goes relative to the element it is attached to, and writes the
//! result as an absolute-position style.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: a [`LayoutHost`] reports anchor, content, root and viewport rects.
//! 2. **Place**: [`compute_placement`] abuts the content to the anchor, applies the
//!    offset, optionally flips once on overflow and optionally clamps to the viewport.
//! 3. **Translate**: coordinates are made relative to the positioning root
//!    (see [`find_positioning_root`]).
//! 4. **Write**: a [`StyleRecord`] replaces the content's positioning style.
//!
//! Steps 1, 3 and 4 are driven by [`DropdownBinder`]; step 2 is pure and can be
//! used on its own.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total math**: placement functions never fail; missing measurements skip a pass.
//! - **Single-pass flipping**: auto-placement tries the opposite side once and stops.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod binder;
mod foundation;
mod host;
mod placement;

pub use binder::dropdown::{AppliedPass, DropdownBinder, DropdownOptions, Pass, SkipReason};
pub use binder::style::StyleRecord;
pub use foundation::core::{CssPosition, DomRect, Point, Rect, Vec2};
pub use foundation::error::{PlacementError, PlacementResult};
pub use host::memory::{MemoryDocument, NodeId, NodeSpec};
pub use host::root::{RootRef, find_first_relative_ancestor, find_positioning_root};
pub use host::tree::LayoutHost;
pub use placement::auto::auto_placement;
pub use placement::clamp::stick_to_edges;
pub use placement::coords::{alignment_coordinate, content_coords};
pub use placement::model::{Alignment, Offset, Placement, PlacementConfig, Position};
pub use placement::offset::offset_coords;
pub use placement::overflow::{Overflow, content_overflow};
pub use placement::resolve::{PlacementOutcome, compute_placement};
