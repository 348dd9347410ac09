//! Coordinate spaces.
//!
//! Animation content is authored in *scene space*: origin at the centre of the frame, `y` up,
//! eight units from bottom to top and a fixed 16:9 aspect. Renderers work in *device space*:
//! pixels of the output surface, origin top-left, `y` down.

/// Scene-space <-> device-space affine mapping.
pub mod mapper;
/// Pointer (client) coordinates -> surface pixels.
pub mod surface;
