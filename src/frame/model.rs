use crate::foundation::core::{Color, Point, SessionId};
use serde::Deserialize;

/// One decoded frame: background colour plus elements in draw order.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameDescriptor {
    /// Session identifier assigned by the server, if the frame carries one.
    pub id: Option<SessionId>,
    /// Animation time of the frame in seconds, if provided.
    pub time: Option<f64>,
    /// Background colour.
    pub background: Color,
    /// Elements; position determines base draw order.
    pub objects: Vec<ElementDescriptor>,
}

/// A scene element, discriminated by its `type` tag.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementDescriptor {
    /// Vectorized path object (`"type": "VMobject"`).
    VMobject(VMobjectDescriptor),
    /// Any other tag; kept so draw positions stay stable, never drawn.
    Unrecognized {
        /// The tag as received (`None` when absent).
        kind: Option<String>,
    },
}

/// A vectorized path element with fill, stroke and optional background stroke.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VMobjectDescriptor {
    /// Path points in scene space (cubic Bézier quadruplets).
    #[serde(deserialize_with = "de_points")]
    pub points: Vec<Point>,
    /// Fill colours (one = solid, more = gradient).
    pub fill: Vec<Color>,
    /// Stroke colours (one = solid, more = gradient).
    pub stroke: Vec<Color>,
    /// Gradient axis shared by fill, stroke and background stroke, in scene space.
    #[serde(deserialize_with = "de_axis")]
    pub gradient_points: [Point; 2],
    /// Stroke end cap.
    pub line_cap: LineCap,
    /// Stroke corner join.
    pub line_join: LineJoin,
    /// Stroke width in percent units.
    pub stroke_width: f64,
    /// Background stroke colours.
    #[serde(default)]
    pub background_stroke: Vec<Color>,
    /// Background stroke width in percent units; `0` means no background stroke.
    #[serde(default)]
    pub background_stroke_width: f64,
}

impl VMobjectDescriptor {
    /// Return `true` when a background-stroke duplicate should be drawn.
    pub fn has_background_stroke(&self) -> bool {
        self.background_stroke_width != 0.0
    }
}

/// Stroke end cap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// Flat end at the path end point.
    #[default]
    Butt,
    /// Semicircular end.
    Round,
    /// Square end extending past the end point.
    Square,
}

/// Stroke corner join.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    /// Sharp corner.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Cut-off corner.
    Bevel,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StyleRepr {
    Name(String),
    Code(i64),
}

// Numeric codes follow cairo: cap 0=butt 1=round 2=square, join 0=miter 1=round 2=bevel.
// Unknown values fall back to the defaults.
impl<'de> Deserialize<'de> for LineCap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match StyleRepr::deserialize(deserializer)? {
            StyleRepr::Name(s) => match s.to_ascii_lowercase().as_str() {
                "round" => Self::Round,
                "square" => Self::Square,
                _ => Self::Butt,
            },
            StyleRepr::Code(1) => Self::Round,
            StyleRepr::Code(2) => Self::Square,
            StyleRepr::Code(_) => Self::Butt,
        })
    }
}

impl<'de> Deserialize<'de> for LineJoin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match StyleRepr::deserialize(deserializer)? {
            StyleRepr::Name(s) => match s.to_ascii_lowercase().as_str() {
                "round" => Self::Round,
                "bevel" => Self::Bevel,
                _ => Self::Miter,
            },
            StyleRepr::Code(1) => Self::Round,
            StyleRepr::Code(2) => Self::Bevel,
            StyleRepr::Code(_) => Self::Miter,
        })
    }
}

/// `[x, y]` or `[x, y, z]`; anything past `y` is dropped.
struct WirePoint(Point);

impl<'de> Deserialize<'de> for WirePoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = <Vec<f64>>::deserialize(deserializer)?;
        match v.as_slice() {
            [x, y, ..] => Ok(Self(Point::new(*x, *y))),
            _ => Err(serde::de::Error::custom(format!(
                "point must have at least 2 coordinates, got {}",
                v.len()
            ))),
        }
    }
}

fn de_points<'de, D>(deserializer: D) -> Result<Vec<Point>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let pts = <Vec<WirePoint>>::deserialize(deserializer)?;
    Ok(pts.into_iter().map(|p| p.0).collect())
}

fn de_axis<'de, D>(deserializer: D) -> Result<[Point; 2], D::Error>
where
    D: serde::Deserializer<'de>,
{
    let [a, b] = <[WirePoint; 2]>::deserialize(deserializer)?;
    Ok([a.0, b.0])
}
