use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::FramecastResult;
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] when it is attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Nominal frames-per-second of the stream.
    pub fps: Fps,
}

/// Sink contract for consuming rendered frames in delivery order.
///
/// Ordering contract: `push_frame` is called with strictly increasing [`FrameIndex`] values.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FramecastResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> FramecastResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// Return `true` once `end` has been called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FramecastResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> FramecastResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Sink shared with the caller so frames can be inspected after the renderer took ownership.
impl<S: FrameSink> FrameSink for std::rc::Rc<std::cell::RefCell<S>> {
    fn begin(&mut self, cfg: SinkConfig) -> FramecastResult<()> {
        self.borrow_mut().begin(cfg)
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FramecastResult<()> {
        self.borrow_mut().push_frame(idx, frame)
    }

    fn end(&mut self) -> FramecastResult<()> {
        self.borrow_mut().end()
    }
}
