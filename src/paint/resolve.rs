use crate::foundation::core::{Color, Point};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::paint::model::{GradientStop, Paint};

/// Resolve an ordered colour list and a gradient axis into a [`Paint`].
///
/// - one colour: [`Paint::Solid`]
/// - `n >= 2` colours: [`Paint::LinearGradient`] with stop `k` at offset `k / (n - 1)`
///
/// An empty list is rejected rather than defaulted.
pub fn resolve_paint(colors: &[Color], start: Point, end: Point) -> FramecastResult<Paint> {
    match colors {
        [] => Err(FramecastError::validation(
            "cannot resolve paint from an empty colour list",
        )),
        [only] => Ok(Paint::solid(*only)),
        _ => {
            let last = (colors.len() - 1) as f64;
            let stops = colors
                .iter()
                .enumerate()
                .map(|(k, &color)| GradientStop {
                    offset: k as f64 / last,
                    color,
                })
                .collect();
            Ok(Paint::LinearGradient { start, end, stops })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/resolve.rs"]
mod tests;
