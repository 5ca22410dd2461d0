use super::*;

#[test]
fn zoom_is_clamped_to_range() {
    let mut feed = FeedState::default();
    feed.zoom_out();
    assert_eq!(feed.zoom, 0);
    for _ in 0..10 {
        feed.zoom_in();
    }
    assert_eq!(feed.zoom, MAX_ZOOM);
    assert!(!feed.can_zoom_in());
    assert!(feed.can_zoom_out());
}

#[test]
fn viewport_grows_with_zoom() {
    let mut feed = FeedState::default();
    assert_eq!(feed.viewport_px(), (300, 200));
    feed.zoom = 5;
    assert_eq!(feed.viewport_px(), (550, 375));
}

#[test]
fn status_only_rotates_while_streaming() {
    let mut feed = FeedState::default();
    feed.advance_status();
    assert_eq!(feed.stream_status(), "Monitoring...");
    feed.toggle_stream();
    feed.advance_status();
    assert_eq!(feed.stream_status(), "Analyzing frames...");
    feed.advance_status();
    feed.advance_status();
    feed.advance_status();
    assert_eq!(feed.stream_status(), "Monitoring...");
}

#[test]
fn selecting_new_camera_clears_previous_result() {
    let mut feed = FeedState::default();
    feed.select_camera(1);
    feed.last_result = Some(SimulationResult::default());
    feed.select_camera(1);
    assert!(feed.last_result.is_some());
    feed.select_camera(2);
    assert!(feed.last_result.is_none());
    assert_eq!(feed.selected_camera, Some(2));
}

#[test]
fn successful_analysis_starts_stream() {
    let mut feed = FeedState { analyzing: true, ..FeedState::default() };
    feed.finish_analysis(Ok(SimulationResult::default()));
    assert!(!feed.analyzing);
    assert!(feed.streaming);
    assert!(feed.last_result.is_some());
}

#[test]
fn failed_analysis_keeps_stream_state() {
    let mut feed = FeedState { analyzing: true, ..FeedState::default() };
    feed.finish_analysis(Err("model missing".to_owned()));
    assert!(!feed.analyzing);
    assert!(!feed.streaming);
    assert_eq!(feed.analysis_error.as_deref(), Some("model missing"));
}

#[test]
fn capture_stats_track_sequence() {
    let mut stats = CaptureStats::default();
    let session = stats.begin();
    stats.record(session, Ok(()));
    stats.record(session, Err("offline".to_owned()));
    assert_eq!(stats.next_seq(), 2);
    assert_eq!(stats.last_error.as_deref(), Some("offline"));
    stats.record(session, Ok(()));
    assert_eq!(stats.last_error, None);
}

#[test]
fn restart_hands_capture_to_new_session() {
    let mut stats = CaptureStats::default();
    let first = stats.begin();
    stats.record(first, Ok(()));
    stats.stop();
    let second = stats.begin();

    assert!(!stats.owns(first));
    assert!(stats.owns(second));
    assert_eq!(stats.sent, 0);

    // The earlier loop finishing must neither count nor stop the new session.
    stats.record(first, Ok(()));
    stats.end(first);
    assert_eq!(stats.sent, 0);
    assert!(stats.active);

    stats.end(second);
    assert!(!stats.active);
}

#[test]
fn stop_ends_ownership() {
    let mut stats = CaptureStats::default();
    let session = stats.begin();
    stats.stop();
    assert!(!stats.owns(session));
}

#[test]
fn capture_continues_only_on_its_camera() {
    let mut feed = FeedState::default();
    feed.select_camera(1);
    let session = feed.capture.begin();
    assert!(feed.capture_continues(session, 1));

    feed.select_camera(2);
    assert!(!feed.capture_continues(session, 1));
}

#[test]
fn summary_lists_alerts() {
    let result = SimulationResult {
        first_prediction: Some("Fighting".to_owned()),
        probability: Some(0.8766),
        alert_types: vec!["Assault".to_owned(), "Fighting".to_owned()],
        ..SimulationResult::default()
    };
    assert_eq!(
        simulation_summary(&result),
        "First: Fighting \u{2022} Prob: 0.88 \u{2022} Alerts: Assault, Fighting"
    );
}

#[test]
fn summary_fills_missing_fields() {
    assert_eq!(
        simulation_summary(&SimulationResult::default()),
        "First: N/A \u{2022} Prob: \u{2014} \u{2022} Alerts: None"
    );
}
