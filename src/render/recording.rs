use crate::encode::sink::FrameSink;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::paint::model::Paint;
use crate::scene::primitive::{BuiltScene, DrawablePrimitive};

/// Renderer that keeps scene state instead of pixels.
///
/// After each `render_current_frame` the scene is snapshotted into [`RecordingRenderer::last_frame`].
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    config: Option<(Canvas, Fps)>,
    background: Option<Paint>,
    primitives: Vec<DrawablePrimitive>,
    last_frame: Option<BuiltScene>,
    frames_rendered: u64,
    clears: u64,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas and frame rate from `configure`, if called.
    pub fn config(&self) -> Option<(Canvas, Fps)> {
        self.config
    }

    /// Primitives currently held (since the last `clear`).
    pub fn primitives(&self) -> &[DrawablePrimitive] {
        &self.primitives
    }

    /// Background currently set.
    pub fn background(&self) -> Option<&Paint> {
        self.background.as_ref()
    }

    /// Scene captured by the most recent `render_current_frame`.
    pub fn last_frame(&self) -> Option<&BuiltScene> {
        self.last_frame.as_ref()
    }

    /// Number of frames rendered so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Number of `clear` calls so far.
    pub fn clears(&self) -> u64 {
        self.clears
    }
}

impl super::backend::SceneRenderer for RecordingRenderer {
    fn configure(&mut self, canvas: Canvas, fps: Fps) -> FramecastResult<()> {
        self.config = Some((canvas, fps));
        Ok(())
    }

    fn attach_surface(&mut self, _surface: Box<dyn FrameSink>) -> FramecastResult<()> {
        Err(FramecastError::render(
            "recording renderer produces no pixels; use CpuRenderer for surfaces",
        ))
    }

    fn clear(&mut self) {
        self.background = None;
        self.primitives.clear();
        self.clears += 1;
    }

    fn set_background(&mut self, paint: Paint) {
        self.background = Some(paint);
    }

    fn add_primitive(&mut self, primitive: DrawablePrimitive) {
        self.primitives.push(primitive);
    }

    fn render_current_frame(&mut self) -> FramecastResult<()> {
        let mut primitives = self.primitives.clone();
        primitives.sort_by_key(|p| p.draw_index);
        self.last_frame = Some(BuiltScene {
            background: self.background.clone().unwrap_or_else(Paint::transparent),
            primitives,
        });
        self.frames_rendered += 1;
        Ok(())
    }
}
