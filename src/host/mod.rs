//! Host documents: where measurements come from and where styles go.

pub(crate) mod memory;
pub(crate) mod root;
pub(crate) mod tree;
