use crate::coords::mapper::CoordinateMapper;
use crate::foundation::core::{Canvas, Color};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::frame::model::{ElementDescriptor, FrameDescriptor, LineCap, LineJoin, VMobjectDescriptor};
use crate::paint::model::Paint;
use crate::paint::resolve::resolve_paint;
use crate::render::backend::SceneRenderer;
use crate::scene::primitive::{BuiltScene, DrawablePrimitive};

/// Turns decoded frames into drawable primitives for one output surface.
///
/// Element `i` owns draw indices `2i` (background-stroke duplicate) and `2i + 1` (main shape).
/// An element without a background stroke leaves `2i` unused.
#[derive(Clone, Copy, Debug)]
pub struct SceneBuilder {
    canvas: Canvas,
    mapper: CoordinateMapper,
}

impl SceneBuilder {
    /// Create a builder targeting `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            mapper: CoordinateMapper::new(canvas.height),
        }
    }

    /// Target surface.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Scene <-> device mapping used for this surface.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Build the primitive set for one frame.
    pub fn build(&self, frame: &FrameDescriptor) -> FramecastResult<BuiltScene> {
        let mut primitives = Vec::with_capacity(frame.objects.len() * 2);
        for (i, obj) in frame.objects.iter().enumerate() {
            match obj {
                ElementDescriptor::VMobject(vm) => self.push_vmobject(i, vm, &mut primitives)?,
                ElementDescriptor::Unrecognized { kind } => {
                    tracing::debug!(index = i, kind = ?kind, "skipping unrecognized element");
                }
            }
        }

        Ok(BuiltScene {
            background: Paint::solid(frame.background),
            primitives,
        })
    }

    /// Build `frame` and replace the renderer's scene with it, then render.
    ///
    /// The frame is fully built before the renderer is touched, so a failing frame leaves the
    /// previous one in place. Returns the number of primitives handed over.
    pub fn present<R: SceneRenderer + ?Sized>(
        &self,
        frame: &FrameDescriptor,
        renderer: &mut R,
    ) -> FramecastResult<usize> {
        let scene = self.build(frame)?;
        let count = scene.primitives.len();

        renderer.clear();
        renderer.set_background(scene.background);
        for p in scene.primitives {
            renderer.add_primitive(p);
        }
        renderer.render_current_frame()?;

        tracing::debug!(primitives = count, objects = frame.objects.len(), "presented frame");
        Ok(count)
    }

    fn push_vmobject(
        &self,
        i: usize,
        vm: &VMobjectDescriptor,
        out: &mut Vec<DrawablePrimitive>,
    ) -> FramecastResult<()> {
        let (background_index, main_index) = draw_indices(i)?;
        let points = self.mapper.map_points(&vm.points);
        let [axis_start, axis_end] = vm.gradient_points.map(|p| self.mapper.to_device(p));
        let resolve = |colors: &[Color], what: &str| -> FramecastResult<Paint> {
            resolve_paint(colors, axis_start, axis_end)
                .map_err(|e| FramecastError::validation(format!("objects[{i}].{what}: {e}")))
        };

        let fill = resolve(&vm.fill, "fill")?;
        let stroke = resolve(&vm.stroke, "stroke")?;

        if vm.has_background_stroke() {
            out.push(DrawablePrimitive {
                points: points.clone(),
                fill: Paint::transparent(),
                stroke: resolve(&vm.background_stroke, "background_stroke")?,
                stroke_width: self.mapper.stroke_width(vm.background_stroke_width),
                line_cap: LineCap::default(),
                line_join: LineJoin::default(),
                draw_index: background_index,
            });
        }

        out.push(DrawablePrimitive {
            points,
            fill,
            stroke,
            stroke_width: self.mapper.stroke_width(vm.stroke_width),
            line_cap: vm.line_cap,
            line_join: vm.line_join,
            draw_index: main_index,
        });
        Ok(())
    }
}

fn draw_indices(i: usize) -> FramecastResult<(u32, u32)> {
    let base = i
        .checked_mul(2)
        .and_then(|b| u32::try_from(b).ok())
        .filter(|b| *b < u32::MAX)
        .ok_or_else(|| FramecastError::validation(format!("too many objects in frame ({i})")))?;
    Ok((base, base + 1))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
