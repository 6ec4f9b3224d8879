//! Orchestration: measure through a [`crate::LayoutHost`], place, write styles.

pub(crate) mod dropdown;
pub(crate) mod style;
