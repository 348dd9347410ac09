use super::*;
use crate::foundation::core::{Canvas, SessionId};
use crate::render::recording::RecordingRenderer;
use crate::session::state::SessionOpts;
use crate::transport::memory::{MemoryTransport, TransportCall};
use serde_json::json;

fn frame(id: &str, objects: usize) -> Vec<u8> {
    let object = json!({
        "type": "VMobject",
        "points": [[0, 0], [0, 0], [1, 1], [1, 1]],
        "fill": [[1, 0, 0, 1]],
        "stroke": [[0, 1, 0, 1]],
        "gradient_points": [[0, 0], [1, 1]],
        "line_cap": 0,
        "line_join": 0,
        "stroke_width": 4
    });
    serde_json::to_vec(&json!({
        "id": id,
        "background": [0, 0, 0, 1],
        "objects": vec![object; objects],
    }))
    .unwrap()
}

async fn streamed(transport: MemoryTransport) -> StreamSession<MemoryTransport, RecordingRenderer> {
    transport.push_stream([frame("s1", 1)]);
    let s = StreamSession::new(transport, RecordingRenderer::new(), SessionOpts::default()).unwrap();
    s.start().await.unwrap();
    s
}

fn geometry() -> SurfaceGeometry {
    SurfaceGeometry::unscaled(Canvas::default())
}

#[tokio::test]
async fn drag_sends_scene_coordinates_and_presents_reply() {
    let transport = MemoryTransport::new();
    transport.push_reply(frame("s1", 3));
    let s = streamed(transport).await;
    let ctl = InteractionController::new(&s, geometry());

    let outcome = ctl.drag_start(1095.0, 405.0).await.unwrap();
    let DragOutcome::Applied { scene } = outcome else {
        panic!("expected Applied, got {outcome:?}");
    };
    assert!((scene.x - 1.0).abs() < 1e-9 && (scene.y - 1.0).abs() < 1e-9);

    let TransportCall::Mutate { id, x, y } = s.transport().calls()[1].clone() else {
        panic!("expected a mutate call");
    };
    assert_eq!(id, SessionId::new("s1"));
    assert!((x - 1.0).abs() < 1e-9 && (y - 1.0).abs() < 1e-9);

    assert_eq!(s.with_renderer(|r| r.primitives().len()), 3);
    assert!(!s.state().in_flight);
}

#[tokio::test]
async fn scaled_surface_is_mapped_back_to_pixels() {
    let s = streamed(MemoryTransport::new()).await;
    let g = SurfaceGeometry {
        surface: Canvas::default(),
        offset: Point::new(10.0, 20.0),
        display_width: 960.0,
        display_height: 540.0,
    };
    let ctl = InteractionController::new(&s, g);
    // Display centre maps to scene origin.
    let p = ctl.to_scene(Point::new(10.0 + 480.0, 20.0 + 270.0));
    assert!(p.x.abs() < 1e-9 && p.y.abs() < 1e-9);
}

#[tokio::test]
async fn move_without_engaged_pointer_is_ignored() {
    let s = streamed(MemoryTransport::new()).await;
    let ctl = InteractionController::new(&s, geometry());
    assert_eq!(ctl.drag_move(1.0, 1.0).await.unwrap(), DragOutcome::Ignored);
    assert_eq!(s.transport().mutate_count(), 0);
}

#[tokio::test]
async fn move_without_session_id_is_ignored() {
    let s = StreamSession::new(
        MemoryTransport::new(),
        RecordingRenderer::new(),
        SessionOpts::default(),
    )
    .unwrap();
    let ctl = InteractionController::new(&s, geometry());
    assert_eq!(ctl.drag_start(1.0, 1.0).await.unwrap(), DragOutcome::Ignored);
    assert_eq!(s.transport().mutate_count(), 0);
}

#[tokio::test]
async fn move_during_outstanding_request_is_dropped() {
    let transport = MemoryTransport::new();
    let reply = transport.push_pending_reply();
    let s = streamed(transport).await;
    let ctl = InteractionController::new(&s, geometry());
    let (s, ctl) = (&s, &ctl);

    let (first, second) = futures::join!(ctl.drag_start(960.0, 540.0), async move {
        let dropped = ctl.drag_move(1000.0, 500.0).await;
        // The outstanding request has not resolved: renderer still shows the streamed frame.
        assert_eq!(s.with_renderer(|r| r.frames_rendered()), 1);
        assert!(s.state().in_flight);
        reply.send(frame("s1", 2)).unwrap();
        dropped
    });

    assert!(matches!(first.unwrap(), DragOutcome::Applied { .. }));
    assert_eq!(second.unwrap(), DragOutcome::Dropped);
    assert_eq!(s.transport().mutate_count(), 1);
    assert_eq!(s.with_renderer(|r| r.primitives().len()), 2);
    assert!(!s.state().in_flight);
}

#[tokio::test]
async fn failed_request_releases_in_flight() {
    // No reply scripted: mutate fails.
    let s = streamed(MemoryTransport::new()).await;
    let ctl = InteractionController::new(&s, geometry());

    assert!(ctl.drag_start(1.0, 1.0).await.is_err());
    assert!(!s.state().in_flight);

    s.transport().push_reply(b"not json".to_vec());
    let err = ctl.drag_move(1.0, 1.0).await.unwrap_err();
    assert!(err.is_malformed_frame());
    assert!(!s.state().in_flight);
}

#[tokio::test]
async fn drag_end_disengages_pointer() {
    let transport = MemoryTransport::new();
    transport.push_reply(frame("s1", 1));
    let s = streamed(transport).await;
    let ctl = InteractionController::new(&s, geometry());

    ctl.drag_start(1.0, 1.0).await.unwrap();
    ctl.drag_end();
    assert!(!s.state().pointer_engaged);
    assert_eq!(ctl.drag_move(2.0, 2.0).await.unwrap(), DragOutcome::Ignored);
}

#[tokio::test]
async fn unload_closes_once_and_swallows_failure() {
    let transport = MemoryTransport::new();
    transport.set_fail_close(true);
    let s = streamed(transport).await;
    let ctl = InteractionController::new(&s, geometry());

    ctl.unload().await;
    ctl.unload().await;
    assert_eq!(s.transport().closed_ids(), vec![SessionId::new("s1")]);
    assert_eq!(s.id(), None);
}

#[tokio::test]
async fn reply_after_unload_is_not_presented() {
    let transport = MemoryTransport::new();
    let reply = transport.push_pending_reply();
    let s = streamed(transport).await;
    let ctl = InteractionController::new(&s, geometry());
    let (s, ctl) = (&s, &ctl);

    let (outcome, ()) = futures::join!(ctl.drag_start(960.0, 540.0), async move {
        ctl.unload().await;
        reply.send(frame("revived", 4)).unwrap();
    });

    assert_eq!(outcome.unwrap(), DragOutcome::Stale);
    assert_eq!(s.id(), None);
    assert_eq!(s.with_renderer(|r| r.frames_rendered()), 1);
    assert_eq!(s.with_renderer(|r| r.primitives().len()), 1);
    assert_eq!(s.transport().closed_ids(), vec![SessionId::new("s1")]);
    assert!(!s.state().in_flight);
}
