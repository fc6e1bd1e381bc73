//! Mathematical primitives for the PFD double-layer model.

pub mod grid;
pub mod roots;
pub mod special;
