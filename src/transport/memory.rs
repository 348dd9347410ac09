use crate::foundation::core::SessionId;
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::transport::{FrameStream, FrameTransport};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use tokio::sync::oneshot;

/// One scripted stream chunk.
#[derive(Debug)]
pub enum Chunk {
    /// Delivered immediately.
    Ready(Vec<u8>),
    /// Read fails with a transport error.
    Failed(String),
    /// Delivered when the paired sender fires; a dropped sender ends the stream.
    Gated(oneshot::Receiver<Vec<u8>>),
}

/// A call observed by [`MemoryTransport`].
#[derive(Clone, Debug, PartialEq)]
pub enum TransportCall {
    /// `open_stream`.
    OpenStream,
    /// `mutate(id, x, y)`.
    Mutate {
        /// Session id sent.
        id: SessionId,
        /// Scene-space x.
        x: f64,
        /// Scene-space y.
        y: f64,
    },
    /// `close(id)`.
    Close {
        /// Session id sent.
        id: SessionId,
    },
}

/// Scripted, single-threaded transport for tests and offline replays.
///
/// Each `open_stream` pops the next scripted stream; each `mutate` pops the next scripted
/// reply. Every call is logged.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    streams: RefCell<VecDeque<Vec<Chunk>>>,
    replies: RefCell<VecDeque<oneshot::Receiver<Vec<u8>>>>,
    calls: RefCell<Vec<TransportCall>>,
    fail_close: Cell<bool>,
}

impl MemoryTransport {
    /// Create a transport with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a stream delivering `frames` and then ending.
    pub fn push_stream<I, B>(&self, frames: I)
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        self.push_stream_chunks(frames.into_iter().map(|f| Chunk::Ready(f.into())).collect());
    }

    /// Script a stream chunk by chunk.
    pub fn push_stream_chunks(&self, chunks: Vec<Chunk>) {
        self.streams.borrow_mut().push_back(chunks);
    }

    /// Script an immediate mutation reply.
    pub fn push_reply(&self, frame: impl Into<Vec<u8>>) {
        let (tx, rx) = oneshot::channel();
        // The receiver is alive in the queue, so this cannot fail.
        let _ = tx.send(frame.into());
        self.replies.borrow_mut().push_back(rx);
    }

    /// Script a mutation reply that is held back until the returned sender fires.
    pub fn push_pending_reply(&self) -> oneshot::Sender<Vec<u8>> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(rx);
        tx
    }

    /// Make every `close` call fail with a transport error.
    pub fn set_fail_close(&self, fail: bool) {
        self.fail_close.set(fail);
    }

    /// Calls observed so far.
    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.borrow().clone()
    }

    /// Ids sent to `close`, in order.
    pub fn closed_ids(&self) -> Vec<SessionId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                TransportCall::Close { id } => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Number of `mutate` calls observed.
    pub fn mutate_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, TransportCall::Mutate { .. }))
            .count()
    }
}

/// Stream handed out by [`MemoryTransport`].
#[derive(Debug)]
pub struct MemoryStream {
    chunks: VecDeque<Chunk>,
}

impl FrameStream for MemoryStream {
    async fn next_chunk(&mut self) -> FramecastResult<Option<Vec<u8>>> {
        match self.chunks.pop_front() {
            None => Ok(None),
            Some(Chunk::Ready(bytes)) => Ok(Some(bytes)),
            Some(Chunk::Failed(msg)) => Err(FramecastError::transport(msg)),
            Some(Chunk::Gated(rx)) => match rx.await {
                Ok(bytes) => Ok(Some(bytes)),
                Err(_) => {
                    self.chunks.clear();
                    Ok(None)
                }
            },
        }
    }
}

impl FrameTransport for MemoryTransport {
    type Stream = MemoryStream;

    async fn open_stream(&self) -> FramecastResult<MemoryStream> {
        self.calls.borrow_mut().push(TransportCall::OpenStream);
        let chunks = self
            .streams
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| FramecastError::transport("no stream scripted"))?;
        Ok(MemoryStream {
            chunks: chunks.into(),
        })
    }

    async fn mutate(&self, id: &SessionId, x: f64, y: f64) -> FramecastResult<Vec<u8>> {
        self.calls.borrow_mut().push(TransportCall::Mutate {
            id: id.clone(),
            x,
            y,
        });
        let rx = self
            .replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| FramecastError::transport("no mutation reply scripted"))?;
        rx.await
            .map_err(|_| FramecastError::transport("mutation reply dropped"))
    }

    async fn close(&self, id: &SessionId) -> FramecastResult<()> {
        self.calls
            .borrow_mut()
            .push(TransportCall::Close { id: id.clone() });
        if self.fail_close.get() {
            return Err(FramecastError::transport("close refused"));
        }
        Ok(())
    }
}
