use crate::foundation::error::{FramecastError, FramecastResult};

pub use kurbo::{Affine, BezPath, Point};

/// 0-based index of a rendered frame in delivery order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> FramecastResult<Self> {
        if den == 0 {
            return Err(FramecastError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FramecastError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Build an integral frame rate, rejecting `0`.
    pub fn from_whole(num: u32) -> FramecastResult<Self> {
        Self::new(num, 1)
    }

    /// Build the nearest `num/1000` rate for a floating-point frame rate.
    pub fn from_f64(fps: f64) -> FramecastResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(FramecastError::validation(format!(
                "frame rate must be finite and > 0, got {fps}"
            )));
        }
        let num = (fps * 1000.0).round();
        if num > f64::from(u32::MAX) {
            return Err(FramecastError::validation("frame rate out of range"));
        }
        let fps = Self::new(num as u32, 1000)?;
        Ok(fps.reduced())
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    fn reduced(self) -> Self {
        fn gcd(a: u32, b: u32) -> u32 {
            if b == 0 { a } else { gcd(b, a % b) }
        }
        let g = gcd(self.num, self.den).max(1);
        Self {
            num: self.num / g,
            den: self.den / g,
        }
    }
}

/// Output surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated, non-empty canvas.
    pub fn new(width: u32, height: u32) -> FramecastResult<Self> {
        if width == 0 || height == 0 {
            return Err(FramecastError::validation(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Four-channel colour exactly as received on the wire.
///
/// Channel range is not interpreted here; renderers decide how to read it (see
/// [`crate::render::cpu::ColorRange`]).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Build a colour from its four channels.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Return `true` when the alpha channel is zero (or below).
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = <Vec<f64>>::deserialize(deserializer)?;
        match v.as_slice() {
            [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
            _ => Err(serde::de::Error::custom(format!(
                "colour must be a 4-element [r,g,b,a] array, got {} elements",
                v.len()
            ))),
        }
    }
}

/// Server-assigned identifier of one animation session.
///
/// The wire may carry the id as a JSON string or integer; both are kept as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SessionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Int(u64),
            Signed(i64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => Ok(Self(s)),
            Repr::Int(n) => Ok(Self(n.to_string())),
            Repr::Signed(n) => Ok(Self(n.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
