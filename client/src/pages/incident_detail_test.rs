use super::*;

fn incident(note: Option<&str>) -> Incident {
    Incident {
        id: 7,
        camera_id: 2,
        event_type: "Fighting".to_owned(),
        score: Some(0.8),
        started_at: "2025-03-01T10:15:00".to_owned(),
        ended_at: None,
        status: "detected".to_owned(),
        note: note.map(str::to_owned),
        clips: Vec::new(),
    }
}

fn clip(path: &str) -> Clip {
    Clip { id: 3, incident_id: Some(7), file_path: path.to_owned(), uploaded_at: None, duration_seconds: None }
}

#[test]
fn parse_incident_id_accepts_positive_integers() {
    assert_eq!(parse_incident_id(Some("42".to_owned())), Some(42));
    assert_eq!(parse_incident_id(Some(" 9 ".to_owned())), Some(9));
}

#[test]
fn parse_incident_id_rejects_garbage_and_non_positive() {
    assert_eq!(parse_incident_id(None), None);
    assert_eq!(parse_incident_id(Some("abc".to_owned())), None);
    assert_eq!(parse_incident_id(Some("0".to_owned())), None);
    assert_eq!(parse_incident_id(Some("-3".to_owned())), None);
}

#[test]
fn still_requested_matches_current_route_only() {
    assert!(still_requested(42, Some("42".to_owned())));
    assert!(!still_requested(42, Some("43".to_owned())));
    assert!(!still_requested(42, None));
}

#[test]
fn anomaly_log_returns_parsed_events() {
    let events = anomaly_log(&incident(Some(
        r#"[{"event":"Fighting","confidence":0.9,"time":"2025-03-01T10:15:01"},
            {"event":"Assault","confidence":0.6,"time":"2025-03-01T10:15:03"}]"#,
    )));
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].event, "Assault");
}

#[test]
fn anomaly_log_ignores_malformed_note() {
    assert!(anomaly_log(&incident(Some("{not json"))).is_empty());
    assert!(anomaly_log(&incident(None)).is_empty());
}

#[test]
fn clip_label_uses_file_name() {
    assert_eq!(clip_label(&clip("storage/incident_7/clip_3.mp4")), "clip_3.mp4");
    assert_eq!(clip_label(&clip("C:\\clips\\evidence.mp4")), "evidence.mp4");
}

#[test]
fn clip_label_falls_back_to_id() {
    assert_eq!(clip_label(&clip("")), "Clip 3");
    assert_eq!(clip_label(&clip("///")), "Clip 3");
}
