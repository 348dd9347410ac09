//! Wire-level frame descriptors and their decoding.
//!
//! A frame arrives as one JSON object:
//!
//! ```json
//! { "id": "140234", "background": [0, 0, 0, 1],
//!   "objects": [ { "type": "VMobject", "points": [[0, 0], [1, 1]], "fill": [[1, 0, 0, 1]],
//!                  "stroke": [[0, 1, 0, 1]], "gradient_points": [[0, 0], [1, 1]],
//!                  "line_cap": "butt", "line_join": "miter", "stroke_width": 4,
//!                  "background_stroke": [[0, 0, 0, 1]], "background_stroke_width": 0 } ] }
//! ```

/// Frame-descriptor decoding from raw bytes.
pub mod decode;
/// Typed frame descriptors.
pub mod model;
/// Whole-run recordings (`{"frames": [...], "fps": ...}`).
pub mod record;
