use crate::foundation::core::{Affine, Point};

/// Scene units between the bottom and top edge of the frame.
pub const SCENE_FRAME_HEIGHT: f64 = 8.0;

/// Horizontal offset from the scene origin to the left edge (`16/9 * 4`).
pub const SCENE_HALF_WIDTH: f64 = 16.0 / 9.0 * 4.0;

/// Vertical offset from the scene origin to the top edge.
pub const SCENE_HALF_HEIGHT: f64 = 4.0;

/// Maps scene-space points onto device pixels and back.
///
/// `dx = S * (x + A)`, `dy = S * (B - y)` with `S = surface_height / 8`. The surface width does
/// not take part: content is laid out for a 16:9 surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    scale: f64,
}

impl CoordinateMapper {
    /// Build a mapper for a surface of the given pixel height.
    pub fn new(surface_height: u32) -> Self {
        Self {
            scale: f64::from(surface_height) / SCENE_FRAME_HEIGHT,
        }
    }

    /// Device pixels per scene unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a scene-space point into device space.
    pub fn to_device(&self, p: Point) -> Point {
        Point::new(
            self.scale * (p.x + SCENE_HALF_WIDTH),
            self.scale * (SCENE_HALF_HEIGHT - p.y),
        )
    }

    /// Map a device-space point back into scene space.
    pub fn to_scene(&self, p: Point) -> Point {
        Point::new(
            p.x / self.scale - SCENE_HALF_WIDTH,
            SCENE_HALF_HEIGHT - p.y / self.scale,
        )
    }

    /// Map a whole path, preserving point order.
    pub fn map_points(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.to_device(p)).collect()
    }

    /// Convert a percentage stroke width into device units (`pct / 100 * height / 8`).
    pub fn stroke_width(&self, percent: f64) -> f64 {
        percent * self.scale / 100.0
    }

    /// The forward mapping as an affine transform.
    pub fn to_device_affine(&self) -> Affine {
        let s = self.scale;
        Affine::new([s, 0.0, 0.0, -s, s * SCENE_HALF_WIDTH, s * SCENE_HALF_HEIGHT])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/coords/mapper.rs"]
mod tests;
