use crate::foundation::core::{Color, Point};

/// One colour stop on a gradient axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Position along the axis, `0.0` at `start` and `1.0` at `end`.
    pub offset: f64,
    /// Stop colour.
    pub color: Color,
}

/// A solid colour or a linear gradient, ready for rasterization.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Paint {
    /// Uniform colour.
    Solid {
        /// The colour.
        color: Color,
    },
    /// Linear gradient between two device-space points.
    ///
    /// Stops are kept in insertion order; offsets are not required to be monotonic.
    LinearGradient {
        /// Axis start.
        start: Point,
        /// Axis end.
        end: Point,
        /// Colour stops, in rendering order along the axis.
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Solid paint of the given colour.
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    /// Fully transparent solid paint.
    pub fn transparent() -> Self {
        Self::solid(Color::TRANSPARENT)
    }

    /// Return `true` when nothing drawn with this paint would be visible.
    pub fn is_invisible(&self) -> bool {
        match self {
            Self::Solid { color } => color.is_transparent(),
            Self::LinearGradient { stops, .. } => stops.iter().all(|s| s.color.is_transparent()),
        }
    }
}
