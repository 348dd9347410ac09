use super::*;

#[test]
fn defaults_are_interactive_full_hd_at_60() {
    let opts = SessionOpts::default();
    assert_eq!(opts.mode, SessionMode::Interactive);
    assert_eq!(opts.canvas, Canvas::new(1920, 1080).unwrap());
    assert_eq!(opts.fps, Fps::from_whole(60).unwrap());

    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Idle);
    assert!(state.id.is_none());
    assert!(!state.pointer_engaged && !state.in_flight);
}

#[test]
fn first_id_wins() {
    let mut state = SessionState::default();
    assert!(!state.capture_id(None));
    assert!(state.capture_id(Some(&SessionId::new("a"))));
    assert!(!state.capture_id(Some(&SessionId::new("b"))));
    assert_eq!(state.id, Some(SessionId::new("a")));
}
