//! Frame sinks.
//!
//! Sinks consume rasterized frames in delivery order and are attached to a renderer as its
//! output surface.

/// PNG image sequence output.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
