//! Network endpoints used by a session.
//!
//! The transport is an external collaborator: [`FrameTransport`] describes what a session needs
//! (a chunked frame stream, a mutation round-trip and a close notification) and
//! [`http::HttpTransport`] implements it over HTTP.

use crate::foundation::core::SessionId;
use crate::foundation::error::FramecastResult;
use std::future::Future;

/// HTTP implementation backed by `reqwest`.
pub mod http;
/// Scripted in-process transport.
pub mod memory;

/// A byte stream delivering one complete frame message per chunk.
pub trait FrameStream {
    /// Next chunk, or `None` once the server ended the stream.
    fn next_chunk(&mut self) -> impl Future<Output = FramecastResult<Option<Vec<u8>>>>;
}

/// The three endpoints a session talks to.
pub trait FrameTransport {
    /// Stream type returned by [`FrameTransport::open_stream`].
    type Stream: FrameStream;

    /// Start a new animation run and return its frame stream.
    fn open_stream(&self) -> impl Future<Output = FramecastResult<Self::Stream>>;

    /// Ask the server to move the interactive element to scene position `(x, y)`; returns the
    /// raw bytes of one updated frame.
    fn mutate(
        &self,
        id: &SessionId,
        x: f64,
        y: f64,
    ) -> impl Future<Output = FramecastResult<Vec<u8>>>;

    /// Tell the server the session is over. The response body is ignored.
    fn close(&self, id: &SessionId) -> impl Future<Output = FramecastResult<()>>;
}
