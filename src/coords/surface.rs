use crate::foundation::core::{Canvas, Point};

/// Placement of the output surface inside the window that reports pointer positions.
///
/// The surface may be displayed scaled (CSS-style) and offset; pointer coordinates have to be
/// brought back into surface pixels before they can be mapped to scene space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
    /// Surface size in pixels.
    pub surface: Canvas,
    /// Top-left corner of the displayed surface, in pointer coordinates.
    pub offset: Point,
    /// Displayed width in pointer coordinates.
    pub display_width: f64,
    /// Displayed height in pointer coordinates.
    pub display_height: f64,
}

impl SurfaceGeometry {
    /// Surface displayed at its native size at the origin.
    pub fn unscaled(surface: Canvas) -> Self {
        Self {
            surface,
            offset: Point::ZERO,
            display_width: f64::from(surface.width),
            display_height: f64::from(surface.height),
        }
    }

    /// Convert a pointer position into surface pixels.
    pub fn to_surface(&self, client: Point) -> Point {
        let sx = if self.display_width > 0.0 {
            f64::from(self.surface.width) / self.display_width
        } else {
            1.0
        };
        let sy = if self.display_height > 0.0 {
            f64::from(self.surface.height) / self.display_height
        } else {
            1.0
        };
        Point::new(
            (client.x - self.offset.x) * sx,
            (client.y - self.offset.y) * sy,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/coords/surface.rs"]
mod tests;
