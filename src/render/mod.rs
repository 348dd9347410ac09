//! Renderers consuming built scenes.
//!
//! [`backend::SceneRenderer`] is the seam between the streaming pipeline and rasterization.
//! Two implementations ship with the crate: a `vello_cpu` rasterizer and a recorder that only
//! keeps scene state (for tests and inspection).

/// Renderer trait and frame type.
pub mod backend;
/// CPU rasterizer powered by `vello_cpu`.
pub mod cpu;
/// Scene-state recorder.
pub mod recording;
