use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Color, FrameIndex, Fps, Point};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::frame::model::{LineCap, LineJoin};
use crate::paint::model::Paint;
use crate::render::backend::{FrameRGBA, SceneRenderer};
use crate::scene::primitive::DrawablePrimitive;

/// Distance under which two path points are treated as the same point.
const POINT_EPS: f64 = 1e-6;

/// How colour channels received on the wire are scaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorRange {
    /// Channels in `[0, 1]` (what the animation server emits).
    #[default]
    Unit,
    /// Channels in `[0, 255]`.
    Byte,
}

impl ColorRange {
    /// Convert a colour into straight-alpha RGBA8, clamping out-of-range channels.
    pub fn to_rgba8(self, c: Color) -> [u8; 4] {
        let max = match self {
            Self::Unit => 1.0,
            Self::Byte => 255.0,
        };
        let to_u8 = |x: f64| -> u8 {
            if x.is_nan() {
                return 0;
            }
            ((x / max).clamp(0.0, 1.0) * 255.0).round() as u8
        };
        [to_u8(c.r), to_u8(c.g), to_u8(c.b), to_u8(c.a)]
    }
}

/// Options for [`CpuRenderer`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuRendererOpts {
    /// Interpretation of colour channels.
    pub color_range: ColorRange,
}

/// Rasterizes built scenes with `vello_cpu` and pushes frames to the attached sink.
///
/// Primitive points are read as cubic Bézier quadruplets `(anchor, handle, handle, anchor)`;
/// a quadruplet that does not start at the previous end point opens a new subpath, and trailing
/// points that do not complete a quadruplet are ignored.
pub struct CpuRenderer {
    opts: CpuRendererOpts,
    config: Option<(Canvas, Fps)>,
    background: Paint,
    primitives: Vec<DrawablePrimitive>,
    sink: Option<Box<dyn FrameSink>>,
    next_frame: FrameIndex,
    ctx: Option<vello_cpu::RenderContext>,
    last_frame: Option<FrameRGBA>,
}

impl CpuRenderer {
    /// Create an unconfigured renderer.
    pub fn new(opts: CpuRendererOpts) -> Self {
        Self {
            opts,
            config: None,
            background: Paint::transparent(),
            primitives: Vec::new(),
            sink: None,
            next_frame: FrameIndex(0),
            ctx: None,
            last_frame: None,
        }
    }

    /// Most recently rasterized frame.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last_frame.as_ref()
    }

    /// Number of frames rendered so far.
    pub fn frames_rendered(&self) -> u64 {
        self.next_frame.0
    }

    /// Rasterize the current scene without delivering it anywhere.
    pub fn rasterize(&mut self) -> FramecastResult<FrameRGBA> {
        let (canvas, _) = self
            .config
            .ok_or_else(|| FramecastError::render("renderer used before configure"))?;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| FramecastError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| FramecastError::render("surface height exceeds u16"))?;

        let mut order: Vec<&DrawablePrimitive> = self.primitives.iter().collect();
        order.sort_by_key(|p| p.draw_index);

        let range = self.opts.color_range;
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        if !self.background.is_invisible() {
            ctx.set_paint(paint_to_cpu(&self.background, range));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }
        for p in order {
            draw_primitive(&mut ctx, p, range);
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl SceneRenderer for CpuRenderer {
    fn configure(&mut self, canvas: Canvas, fps: Fps) -> FramecastResult<()> {
        if self.sink.is_some() {
            return Err(FramecastError::render(
                "cannot reconfigure while a surface is attached",
            ));
        }
        self.config = Some((canvas, fps));
        Ok(())
    }

    fn attach_surface(&mut self, mut surface: Box<dyn FrameSink>) -> FramecastResult<()> {
        let (canvas, fps) = self
            .config
            .ok_or_else(|| FramecastError::render("configure the renderer before attaching"))?;
        if let Some(mut old) = self.sink.take() {
            old.end()?;
        }
        surface.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps,
        })?;
        self.sink = Some(surface);
        self.next_frame = FrameIndex(0);
        Ok(())
    }

    fn clear(&mut self) {
        self.background = Paint::transparent();
        self.primitives.clear();
    }

    fn set_background(&mut self, paint: Paint) {
        self.background = paint;
    }

    fn add_primitive(&mut self, primitive: DrawablePrimitive) {
        self.primitives.push(primitive);
    }

    fn render_current_frame(&mut self) -> FramecastResult<()> {
        let frame = self.rasterize()?;
        let idx = self.next_frame;
        if let Some(sink) = self.sink.as_mut() {
            sink.push_frame(idx, &frame)?;
        }
        self.next_frame = FrameIndex(idx.0 + 1);
        self.last_frame = Some(frame);
        Ok(())
    }

    fn finish(&mut self) -> FramecastResult<()> {
        match self.sink.take() {
            Some(mut sink) => sink.end(),
            None => Ok(()),
        }
    }
}

fn draw_primitive(ctx: &mut vello_cpu::RenderContext, p: &DrawablePrimitive, range: ColorRange) {
    let Some(path) = bezpath_from_points(&p.points) else {
        return;
    };

    if !p.fill.is_invisible() {
        ctx.set_paint(paint_to_cpu(&p.fill, range));
        ctx.fill_path(&path);
    }

    if p.stroke_width > 0.0 && !p.stroke.is_invisible() {
        let stroke = vello_cpu::kurbo::Stroke::new(p.stroke_width)
            .with_caps(cap_to_cpu(p.line_cap))
            .with_join(join_to_cpu(p.line_join));
        ctx.set_stroke(stroke);
        ctx.set_paint(paint_to_cpu(&p.stroke, range));
        ctx.stroke_path(&path);
    }
}

fn bezpath_from_points(points: &[Point]) -> Option<vello_cpu::kurbo::BezPath> {
    let mut out = vello_cpu::kurbo::BezPath::new();
    let mut subpath_start: Option<Point> = None;
    let mut cursor: Option<Point> = None;

    for quad in points.chunks_exact(4) {
        let (a0, h0, h1, a1) = (quad[0], quad[1], quad[2], quad[3]);
        if cursor.is_none_or(|c| c.distance(a0) > POINT_EPS) {
            out.move_to(point_to_cpu(a0));
            subpath_start = Some(a0);
        }
        out.curve_to(point_to_cpu(h0), point_to_cpu(h1), point_to_cpu(a1));
        cursor = Some(a1);
        if subpath_start.is_some_and(|s| s.distance(a1) <= POINT_EPS) {
            out.close_path();
            cursor = None;
        }
    }

    if out.elements().is_empty() {
        None
    } else {
        Some(out)
    }
}

fn paint_to_cpu(paint: &Paint, range: ColorRange) -> vello_cpu::PaintType {
    match paint {
        Paint::Solid { color } => color_to_cpu(*color, range).into(),
        Paint::LinearGradient { start, end, stops } => {
            // A zero-length axis has no direction; fall back to the last stop.
            if start.distance(*end) <= POINT_EPS || stops.len() < 2 {
                let color = stops.last().map(|s| s.color).unwrap_or(Color::TRANSPARENT);
                return color_to_cpu(color, range).into();
            }
            let cpu_stops: Vec<(f32, vello_cpu::peniko::Color)> = stops
                .iter()
                .map(|s| (s.offset as f32, color_to_cpu(s.color, range)))
                .collect();
            vello_cpu::peniko::Gradient::new_linear(point_to_cpu(*start), point_to_cpu(*end))
                .with_stops(cpu_stops.as_slice())
                .into()
        }
    }
}

fn color_to_cpu(c: Color, range: ColorRange) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = range.to_rgba8(c);
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn cap_to_cpu(cap: LineCap) -> vello_cpu::kurbo::Cap {
    match cap {
        LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
        LineCap::Round => vello_cpu::kurbo::Cap::Round,
        LineCap::Square => vello_cpu::kurbo::Cap::Square,
    }
}

fn join_to_cpu(join: LineJoin) -> vello_cpu::kurbo::Join {
    match join {
        LineJoin::Miter => vello_cpu::kurbo::Join::Miter,
        LineJoin::Round => vello_cpu::kurbo::Join::Round,
        LineJoin::Bevel => vello_cpu::kurbo::Join::Bevel,
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
