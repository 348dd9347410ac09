use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::frame::decode::decode_frame_value;
use crate::frame::model::FrameDescriptor;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Deserialize)]
struct RecordingDef {
    frames: Vec<serde_json::Value>,
    fps: f64,
    #[serde(default)]
    frame_width: Option<f64>,
    #[serde(default)]
    frame_height: Option<f64>,
    pixel_width: u32,
    pixel_height: u32,
}

/// A whole animation run saved by the server as a single document.
///
/// Frames use the same shape as streamed messages, so a recording can be replayed through
/// [`crate::scene::builder::SceneBuilder`] without a network connection.
#[derive(Clone, Debug)]
pub struct RecordedAnimation {
    canvas: Canvas,
    fps: Fps,
    scene_size: Option<(f64, f64)>,
    frames: Vec<FrameDescriptor>,
}

impl RecordedAnimation {
    /// Parse a recording from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FramecastResult<Self> {
        let def: RecordingDef = serde_json::from_reader(r)
            .map_err(|e| FramecastError::malformed(format!("parse recording JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse a recording from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FramecastResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FramecastError::io(format!("open recording '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    fn from_def(def: RecordingDef) -> FramecastResult<Self> {
        let canvas = Canvas::new(def.pixel_width, def.pixel_height)
            .map_err(|e| FramecastError::malformed(format!("recording canvas: {e}")))?;
        let fps = Fps::from_f64(def.fps)
            .map_err(|e| FramecastError::malformed(format!("recording fps: {e}")))?;
        let frames = def
            .frames
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                decode_frame_value(v).map_err(|e| {
                    FramecastError::malformed(format!("recording frames[{i}]: {e}"))
                })
            })
            .collect::<FramecastResult<Vec<_>>>()?;
        let scene_size = def.frame_width.zip(def.frame_height);

        Ok(Self {
            canvas,
            fps,
            scene_size,
            frames,
        })
    }

    /// Output surface size the recording was produced for.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Recorded frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Scene-space frame size (`frame_width`, `frame_height`), when recorded.
    pub fn scene_size(&self) -> Option<(f64, f64)> {
        self.scene_size
    }

    /// Frames in recorded order.
    pub fn frames(&self) -> &[FrameDescriptor] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when the recording holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/record.rs"]
mod tests;
