use super::*;
use crate::foundation::core::Point;
use crate::frame::model::{LineCap, LineJoin};

const EXAMPLE: &str = r#"{
  "background": [0, 0, 0, 255],
  "objects": [{
    "type": "VMobject",
    "points": [[0, 0], [1, 1]],
    "fill": [[255, 0, 0, 255]],
    "stroke": [[0, 255, 0, 255]],
    "gradient_points": [[0, 0], [1, 1]],
    "line_cap": 0,
    "line_join": 0,
    "stroke_width": 10,
    "background_stroke": [[0, 0, 0, 0]],
    "background_stroke_width": 0
  }]
}"#;

#[test]
fn decodes_reference_frame() {
    let frame = decode_frame(EXAMPLE.as_bytes()).unwrap();
    assert_eq!(frame.id, None);
    assert_eq!(frame.background, Color::rgba(0.0, 0.0, 0.0, 255.0));
    assert_eq!(frame.objects.len(), 1);

    let ElementDescriptor::VMobject(vm) = &frame.objects[0] else {
        panic!("expected VMobject");
    };
    assert_eq!(vm.points, vec![Point::ZERO, Point::new(1.0, 1.0)]);
    assert_eq!(vm.fill, vec![Color::rgba(255.0, 0.0, 0.0, 255.0)]);
    assert_eq!(vm.stroke, vec![Color::rgba(0.0, 255.0, 0.0, 255.0)]);
    assert_eq!(vm.gradient_points, [Point::ZERO, Point::new(1.0, 1.0)]);
    assert_eq!(vm.line_cap, LineCap::Butt);
    assert_eq!(vm.line_join, LineJoin::Miter);
    assert_eq!(vm.stroke_width, 10.0);
    assert!(!vm.has_background_stroke());
}

#[test]
fn captures_numeric_and_string_ids() {
    let f = decode_frame(br#"{"id": 42, "background": [0,0,0,1], "objects": []}"#).unwrap();
    assert_eq!(f.id, Some(SessionId::new("42")));
    let f = decode_frame(br#"{"id": "s-1", "time": 0.5, "background": [0,0,0,1], "objects": []}"#)
        .unwrap();
    assert_eq!(f.id, Some(SessionId::new("s-1")));
    assert_eq!(f.time, Some(0.5));
}

#[test]
fn unknown_types_are_kept_as_unrecognized() {
    let raw = br#"{"background": [0,0,0,1], "objects": [
        {"type": "ImageMobject", "image_base64": ""},
        {"no_type": true}
    ]}"#;
    let f = decode_frame(raw).unwrap();
    assert_eq!(
        f.objects,
        vec![
            ElementDescriptor::Unrecognized {
                kind: Some("ImageMobject".to_owned())
            },
            ElementDescriptor::Unrecognized { kind: None },
        ]
    );
}

#[test]
fn style_names_and_codes_decode() {
    let raw = br#"{"background": [0,0,0,1], "objects": [
        {"type": "VMobject", "points": [], "fill": [[0,0,0,1]], "stroke": [[0,0,0,1]],
         "gradient_points": [[0,0,0],[1,0,0]], "line_cap": "round", "line_join": "bevel",
         "stroke_width": 4},
        {"type": "VMobject", "points": [], "fill": [[0,0,0,1]], "stroke": [[0,0,0,1]],
         "gradient_points": [[0,0],[1,0]], "line_cap": 2, "line_join": 1,
         "stroke_width": 4, "background_stroke": [[1,1,1,1]], "background_stroke_width": 8},
        {"type": "VMobject", "points": [], "fill": [[0,0,0,1]], "stroke": [[0,0,0,1]],
         "gradient_points": [[0,0],[1,0]], "line_cap": "auto", "line_join": 9,
         "stroke_width": 4}
    ]}"#;
    let f = decode_frame(raw).unwrap();
    let styles: Vec<(LineCap, LineJoin, bool)> = f
        .objects
        .iter()
        .map(|o| match o {
            ElementDescriptor::VMobject(vm) => {
                (vm.line_cap, vm.line_join, vm.has_background_stroke())
            }
            ElementDescriptor::Unrecognized { .. } => panic!("unexpected unrecognized element"),
        })
        .collect();
    assert_eq!(
        styles,
        vec![
            (LineCap::Round, LineJoin::Bevel, false),
            (LineCap::Square, LineJoin::Round, true),
            (LineCap::Butt, LineJoin::Miter, false),
        ]
    );
}

#[test]
fn missing_required_fields_are_malformed() {
    for raw in [
        &br#"{"objects": []}"#[..],
        &br#"{"background": [0,0,0,1]}"#[..],
        &br#"not json"#[..],
        &br#"[1, 2, 3]"#[..],
        &br#"{"background": [0,0,0,1], "objects": [{"type": "VMobject", "points": []}]}"#[..],
        &b""[..],
    ] {
        let err = decode_frame(raw).unwrap_err();
        assert!(err.is_malformed_frame(), "{err}");
    }
}

#[test]
fn malformed_element_reports_its_position() {
    let raw = br#"{"background": [0,0,0,1], "objects": [
        {"type": "Text"},
        {"type": "VMobject", "points": [[0]], "fill": [], "stroke": [],
         "gradient_points": [[0,0],[1,0]], "line_cap": 0, "line_join": 0, "stroke_width": 1}
    ]}"#;
    let err = decode_frame(raw).unwrap_err();
    assert!(err.to_string().contains("objects[1]"), "{err}");
}

#[test]
fn no_semantic_validation_is_performed() {
    let raw = br#"{"background": [900, -3, 0, 2], "objects": [
        {"type": "VMobject", "points": [[0,0],[1,0],[2,0]], "fill": [], "stroke": [[0,0,0,1]],
         "gradient_points": [[0,0],[0,0]], "line_cap": 0, "line_join": 0, "stroke_width": -5}
    ]}"#;
    let f = decode_frame(raw).unwrap();
    assert_eq!(f.background, Color::rgba(900.0, -3.0, 0.0, 2.0));
}
