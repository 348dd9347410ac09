use super::*;

fn opts(base: &str) -> HttpTransportOpts {
    HttpTransportOpts {
        base_url: base.to_owned(),
        stream_path: "/stream".to_owned(),
        move_path: "/move".to_owned(),
        close_path: "/close".to_owned(),
    }
}

#[test]
fn endpoints_join_base_url() {
    let t = HttpTransport::new(opts("http://127.0.0.1:3000")).unwrap();
    assert_eq!(t.stream_url().as_str(), "http://127.0.0.1:3000/stream");
    assert_eq!(t.move_url().as_str(), "http://127.0.0.1:3000/move");
    assert_eq!(t.close_url().as_str(), "http://127.0.0.1:3000/close");
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = HttpTransport::new(opts("not a url")).unwrap_err();
    assert!(matches!(err, FramecastError::Validation(_)), "{err}");
}

#[test]
fn request_bodies_match_server_contract() {
    let id = SessionId::new("77");
    let body = serde_json::to_value(MoveRequest {
        id: &id,
        x: 1.5,
        y: -2.0,
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({"id": "77", "x": 1.5, "y": -2.0}));
    let body = serde_json::to_value(CloseRequest { id: &id }).unwrap();
    assert_eq!(body, serde_json::json!({"id": "77"}));
}
