//! Resolved paint: what a shape is filled or stroked with.

/// Paint value types.
pub mod model;
/// Colour-list -> paint resolution.
pub mod resolve;
