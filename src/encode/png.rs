use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::render::backend::FrameRGBA;
use std::path::{Path, PathBuf};

/// Writes every frame as `<prefix>_<index>.png` into a directory.
///
/// Premultiplied frames are converted to straight alpha before encoding.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Create a sink writing into `dir` with the default `frame` prefix.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(dir, "frame")
    }

    /// Create a sink writing into `dir` with a custom file prefix.
    pub fn with_prefix(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            written: Vec::new(),
        }
    }

    /// Path a frame index is written to.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}_{:06}.png", self.prefix, idx.0))
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> FramecastResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            FramecastError::io(format!("create output dir '{}': {e}", self.dir.display()))
        })?;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FramecastResult<()> {
        let path = self.frame_path(idx);
        let data = frame.to_straight_rgba8();
        image::save_buffer_with_format(
            &path,
            &data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| FramecastError::io(format!("write png '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "wrote frame");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> FramecastResult<()> {
        tracing::info!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence complete"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
