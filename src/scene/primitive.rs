use crate::foundation::core::Point;
use crate::frame::model::{LineCap, LineJoin};
use crate::paint::model::Paint;

/// One fully specified shape in device space.
///
/// Renderers composite primitives back-to-front by ascending `draw_index`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DrawablePrimitive {
    /// Path points in device space (cubic Bézier quadruplets).
    pub points: Vec<Point>,
    /// Fill paint.
    pub fill: Paint,
    /// Stroke paint.
    pub stroke: Paint,
    /// Stroke width in device pixels.
    pub stroke_width: f64,
    /// Stroke end cap.
    pub line_cap: LineCap,
    /// Stroke corner join.
    pub line_join: LineJoin,
    /// Compositing order; larger is drawn later.
    pub draw_index: u32,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BuiltScene {
    /// Background paint.
    pub background: Paint,
    /// Primitives in ascending draw order.
    pub primitives: Vec<DrawablePrimitive>,
}
