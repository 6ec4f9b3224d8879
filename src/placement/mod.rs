//! Anchored placement math.
//!
//! Everything here is pure: rectangles in, coordinates out. Hosts measure,
//! [`resolve::compute_placement`] decides, and the binder writes styles.

pub(crate) mod auto;
pub(crate) mod clamp;
pub(crate) mod coords;
pub(crate) mod model;
pub(crate) mod offset;
pub(crate) mod overflow;
pub(crate) mod resolve;
