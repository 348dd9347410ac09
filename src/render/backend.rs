use crate::encode::sink::FrameSink;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::FramecastResult;
use crate::paint::model::Paint;
use crate::scene::primitive::DrawablePrimitive;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Return the RGBA8 pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data
            .get(idx..idx + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Copy of the pixel data with straight (non-premultiplied) alpha.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// External renderer contract used by [`crate::scene::builder::SceneBuilder`].
///
/// A frame is produced by `clear`, `set_background`, any number of `add_primitive` calls and
/// one `render_current_frame`. Nothing carries over between frames.
pub trait SceneRenderer {
    /// Set the output size and frame rate. Must precede [`SceneRenderer::attach_surface`].
    fn configure(&mut self, canvas: Canvas, fps: Fps) -> FramecastResult<()>;

    /// Attach the surface rendered frames are delivered to.
    fn attach_surface(&mut self, surface: Box<dyn FrameSink>) -> FramecastResult<()>;

    /// Drop every primitive and reset the background.
    fn clear(&mut self);

    /// Set the background paint for the current frame.
    fn set_background(&mut self, paint: Paint);

    /// Add one primitive to the current frame.
    fn add_primitive(&mut self, primitive: DrawablePrimitive);

    /// Rasterize the current frame and deliver it to the attached surface.
    fn render_current_frame(&mut self) -> FramecastResult<()>;

    /// Flush and detach the surface. Called once when playback is over.
    fn finish(&mut self) -> FramecastResult<()> {
        Ok(())
    }
}

impl<R: SceneRenderer + ?Sized> SceneRenderer for Box<R> {
    fn configure(&mut self, canvas: Canvas, fps: Fps) -> FramecastResult<()> {
        (**self).configure(canvas, fps)
    }

    fn attach_surface(&mut self, surface: Box<dyn FrameSink>) -> FramecastResult<()> {
        (**self).attach_surface(surface)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn set_background(&mut self, paint: Paint) {
        (**self).set_background(paint)
    }

    fn add_primitive(&mut self, primitive: DrawablePrimitive) {
        (**self).add_primitive(primitive)
    }

    fn render_current_frame(&mut self) -> FramecastResult<()> {
        (**self).render_current_frame()
    }

    fn finish(&mut self) -> FramecastResult<()> {
        (**self).finish()
    }
}
