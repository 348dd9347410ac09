//! Session lifecycle: streaming playback and interactive edits.
//!
//! A [`stream::StreamSession`] owns the transport and the renderer and turns every streamed
//! message into a presented frame. An [`interact::InteractionController`] borrows a session and
//! drives mutation round-trips from pointer events. Both take `&self` and keep their state in
//! cells, so they can be interleaved on one thread without holding a borrow across an await.

/// Pointer-driven mutation requests.
pub mod interact;
/// Session options and observable state.
pub mod state;
/// Stream reading and frame presentation.
pub mod stream;
