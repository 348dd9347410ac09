use crate::foundation::core::{Color, SessionId};
use crate::foundation::error::{FramecastError, FramecastResult};
use crate::frame::model::{ElementDescriptor, FrameDescriptor, VMobjectDescriptor};
use serde::Deserialize;

/// Element tag handled by the scene builder.
pub const VMOBJECT_TAG: &str = "VMobject";

#[derive(Deserialize)]
struct FrameWire {
    #[serde(default)]
    id: Option<SessionId>,
    #[serde(default)]
    time: Option<f64>,
    background: Color,
    objects: Vec<serde_json::Value>,
}

/// Decode one streamed message into a [`FrameDescriptor`].
///
/// Fails with [`FramecastError::MalformedFrame`] when the payload is not a JSON object, lacks
/// `background`/`objects`, or carries a `VMobject` with missing or mistyped fields. Elements with
/// any other `type` decode as [`ElementDescriptor::Unrecognized`].
pub fn decode_frame(raw: &[u8]) -> FramecastResult<FrameDescriptor> {
    let wire: FrameWire = serde_json::from_slice(raw)
        .map_err(|e| FramecastError::malformed(format!("parse frame JSON: {e}")))?;
    frame_from_wire(wire)
}

/// Decode a frame from an already-parsed JSON value.
pub fn decode_frame_value(value: serde_json::Value) -> FramecastResult<FrameDescriptor> {
    let wire: FrameWire = serde_json::from_value(value)
        .map_err(|e| FramecastError::malformed(format!("parse frame JSON: {e}")))?;
    frame_from_wire(wire)
}

fn frame_from_wire(wire: FrameWire) -> FramecastResult<FrameDescriptor> {
    let objects = wire
        .objects
        .into_iter()
        .enumerate()
        .map(|(i, v)| decode_element(i, v))
        .collect::<FramecastResult<Vec<_>>>()?;

    Ok(FrameDescriptor {
        id: wire.id,
        time: wire.time,
        background: wire.background,
        objects,
    })
}

fn decode_element(index: usize, value: serde_json::Value) -> FramecastResult<ElementDescriptor> {
    let kind = value
        .get("type")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);

    match kind.as_deref() {
        Some(VMOBJECT_TAG) => {
            let vm: VMobjectDescriptor = serde_json::from_value(value).map_err(|e| {
                FramecastError::malformed(format!("objects[{index}] ({VMOBJECT_TAG}): {e}"))
            })?;
            Ok(ElementDescriptor::VMobject(vm))
        }
        _ => Ok(ElementDescriptor::Unrecognized { kind }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/decode.rs"]
mod tests;
