use crate::encode::sink::FrameSink;
use crate::foundation::core::SessionId;
use crate::foundation::error::FramecastResult;
use crate::frame::decode::decode_frame;
use crate::frame::model::FrameDescriptor;
use crate::render::backend::SceneRenderer;
use crate::scene::builder::SceneBuilder;
use crate::session::state::{SessionMode, SessionOpts, SessionPhase, SessionState};
use crate::transport::{FrameStream, FrameTransport};
use std::cell::RefCell;

/// How a call to [`StreamSession::start`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamOutcome {
    /// The server ended the stream after `frames` frames.
    Completed {
        /// Frames presented from this stream.
        frames: u64,
    },
    /// A later `start` or a `close` took over; this stream was abandoned.
    Superseded,
}

/// Drives one animation session: reads the frame stream and presents every frame in order.
pub struct StreamSession<T, R> {
    transport: T,
    renderer: RefCell<R>,
    builder: SceneBuilder,
    mode: SessionMode,
    state: RefCell<SessionState>,
}

/// Clears the in-flight flag when dropped.
pub(crate) struct InFlightGuard<'a> {
    state: &'a RefCell<SessionState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.borrow_mut().in_flight = false;
    }
}

impl<T: FrameTransport, R: SceneRenderer> StreamSession<T, R> {
    /// Configure `renderer` for `opts` and build an idle session.
    pub fn new(transport: T, mut renderer: R, opts: SessionOpts) -> FramecastResult<Self> {
        renderer.configure(opts.canvas, opts.fps)?;
        Ok(Self {
            transport,
            renderer: RefCell::new(renderer),
            builder: SceneBuilder::new(opts.canvas),
            mode: opts.mode,
            state: RefCell::new(SessionState::default()),
        })
    }

    /// Protocol variant.
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Server-assigned id, once known.
    pub fn id(&self) -> Option<SessionId> {
        self.state.borrow().id.clone()
    }

    /// Builder used for every presented frame.
    pub fn builder(&self) -> &SceneBuilder {
        &self.builder
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run `f` against the renderer.
    pub fn with_renderer<U>(&self, f: impl FnOnce(&mut R) -> U) -> U {
        f(&mut self.renderer.borrow_mut())
    }

    /// Give back the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer.into_inner()
    }

    /// Attach the surface rendered frames go to.
    pub fn attach_surface(&self, surface: Box<dyn FrameSink>) -> FramecastResult<()> {
        self.renderer.borrow_mut().attach_surface(surface)
    }

    /// Flush the renderer's surface.
    pub fn finish(&self) -> FramecastResult<()> {
        self.renderer.borrow_mut().finish()
    }

    /// Open a fresh stream and present its frames until it ends.
    ///
    /// A previously captured id is forgotten first; in [`SessionMode::Interactive`] it is also
    /// closed (best effort). A malformed chunk or transport failure returns the session to
    /// [`SessionPhase::Idle`] and is returned as the error.
    #[tracing::instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn start(&self) -> FramecastResult<StreamOutcome> {
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.generation
        };

        let previous = self.state.borrow_mut().id.take();
        if let Some(id) = previous
            && self.mode == SessionMode::Interactive
        {
            self.notify_close(&id).await;
        }

        if self.is_superseded(generation) {
            return Ok(StreamOutcome::Superseded);
        }
        self.state.borrow_mut().phase = SessionPhase::Streaming;

        let result = self.pump(generation).await;
        match &result {
            Ok(StreamOutcome::Superseded) => {}
            Ok(StreamOutcome::Completed { frames }) => {
                tracing::info!(frames, "stream completed");
                self.state.borrow_mut().phase = SessionPhase::Idle;
            }
            Err(e) => {
                tracing::warn!(error = %e, "stream aborted");
                if !self.is_superseded(generation) {
                    self.state.borrow_mut().phase = SessionPhase::Idle;
                }
            }
        }
        result
    }

    /// Send a best-effort close for the current id, forget it and go idle.
    ///
    /// A stream still being read is abandoned at its next chunk. Calling this on an idle session
    /// without an id does nothing.
    #[tracing::instrument(skip(self))]
    pub async fn close(&self) {
        let id = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.phase = SessionPhase::Closing;
            state.id.take()
        };
        if let Some(id) = id {
            self.notify_close(&id).await;
        }
        self.state.borrow_mut().phase = SessionPhase::Idle;
    }

    /// Decode one raw message and present it.
    pub fn present_bytes(&self, raw: &[u8]) -> FramecastResult<FrameDescriptor> {
        let frame = decode_frame(raw)?;
        self.present(&frame)?;
        Ok(frame)
    }

    /// Capture the frame's id (first one wins) and present it.
    pub fn present(&self, frame: &FrameDescriptor) -> FramecastResult<usize> {
        if self.state.borrow_mut().capture_id(frame.id.as_ref()) {
            tracing::debug!(id = ?frame.id, "captured session id");
        }
        let mut renderer = self.renderer.borrow_mut();
        self.builder.present(frame, &mut *renderer)
    }

    pub(crate) fn begin_request(&self) -> Option<InFlightGuard<'_>> {
        let mut state = self.state.borrow_mut();
        if state.in_flight {
            return None;
        }
        state.in_flight = true;
        Some(InFlightGuard { state: &self.state })
    }

    pub(crate) fn set_pointer_engaged(&self, engaged: bool) {
        self.state.borrow_mut().pointer_engaged = engaged;
    }

    async fn pump(&self, generation: u64) -> FramecastResult<StreamOutcome> {
        let mut stream = self.transport.open_stream().await?;
        let mut frames = 0u64;
        loop {
            let chunk = stream.next_chunk().await;
            if self.is_superseded(generation) {
                tracing::debug!(generation, "stream superseded");
                return Ok(StreamOutcome::Superseded);
            }
            let Some(raw) = chunk? else {
                return Ok(StreamOutcome::Completed { frames });
            };
            self.present_bytes(&raw)?;
            frames += 1;
        }
    }

    fn is_superseded(&self, generation: u64) -> bool {
        self.state.borrow().generation != generation
    }

    async fn notify_close(&self, id: &SessionId) {
        if let Err(e) = self.transport.close(id).await {
            tracing::warn!(%id, error = %e, "close notification failed");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/stream.rs"]
mod tests;
