use super::*;

// =============================================================
// Camera
// =============================================================

#[test]
fn camera_decodes_integer_active_flag() {
    let camera: Camera = serde_json::from_value(serde_json::json!({
        "id": 4,
        "name": "Emergency Exit",
        "rtsp_url": null,
        "location": "Building A - Side Door",
        "is_active": 0
    }))
    .unwrap();
    assert!(!camera.is_active);
    assert_eq!(camera.location.as_deref(), Some("Building A - Side Door"));
}

#[test]
fn camera_decodes_boolean_active_flag_and_missing_location() {
    let camera: Camera = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Main Entrance",
        "is_active": true
    }))
    .unwrap();
    assert!(camera.is_active);
    assert_eq!(camera.location, None);
}

#[test]
fn camera_rejects_string_active_flag() {
    let result: Result<Camera, _> = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Main Entrance",
        "is_active": "yes"
    }));
    assert!(result.is_err());
}

// =============================================================
// Incident
// =============================================================

fn incident_json() -> serde_json::Value {
    serde_json::json!({
        "id": 12,
        "camera_id": 3,
        "event_type": "Fighting",
        "score": 0.91,
        "started_at": "2025-03-01T10:15:00",
        "ended_at": null,
        "status": "detected",
        "note": null,
        "clips": [{
            "id": 5,
            "incident_id": 12,
            "file_path": "storage/incident_12/clip.mp4",
            "uploaded_at": "2025-03-01T10:16:00",
            "duration_seconds": null
        }]
    })
}

#[test]
fn incident_decodes_backend_shape() {
    let incident: Incident = serde_json::from_value(incident_json()).unwrap();
    assert_eq!(incident.id, 12);
    assert_eq!(incident.score, Some(0.91));
    assert_eq!(incident.clips.len(), 1);
    assert_eq!(incident.clips[0].incident_id, Some(12));
}

#[test]
fn incident_without_clips_defaults_to_empty() {
    let mut value = incident_json();
    value.as_object_mut().unwrap().remove("clips");
    let incident: Incident = serde_json::from_value(value).unwrap();
    assert!(incident.clips.is_empty());
}

#[test]
fn anomaly_events_empty_when_note_missing_or_blank() {
    let mut incident: Incident = serde_json::from_value(incident_json()).unwrap();
    assert!(incident.anomaly_events().unwrap().is_empty());
    incident.note = Some("   ".to_owned());
    assert!(incident.anomaly_events().unwrap().is_empty());
}

#[test]
fn anomaly_events_parse_note_log() {
    let mut incident: Incident = serde_json::from_value(incident_json()).unwrap();
    incident.note = Some(r#"[{"event":"Fighting","confidence":0.87,"time":"2025-03-01T10:15:02"}]"#.to_owned());
    let events = incident.anomaly_events().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event, "Fighting");
}

#[test]
fn anomaly_events_reject_free_text_note() {
    let mut incident: Incident = serde_json::from_value(incident_json()).unwrap();
    incident.note = Some("operator reviewed".to_owned());
    assert!(incident.anomaly_events().is_err());
}

// =============================================================
// Auth + analysis payloads
// =============================================================

#[test]
fn token_type_defaults_to_bearer() {
    let token: Token = serde_json::from_value(serde_json::json!({ "access_token": "jwt" })).unwrap();
    assert_eq!(token.token_type, "bearer");
}

#[test]
fn user_decodes_integer_active_flag() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "email": "ops@example.com",
        "is_active": 1
    }))
    .unwrap();
    assert!(user.is_active);
}

#[test]
fn detect_response_accepts_bare_list() {
    let response: DetectResponse = serde_json::from_value(serde_json::json!([
        { "event": "Robbery", "confidence": 0.7, "time": "00:00:04" }
    ]))
    .unwrap();
    assert_eq!(response.into_events().len(), 1);
}

#[test]
fn detect_response_accepts_wrapped_events() {
    let response: DetectResponse = serde_json::from_value(serde_json::json!({
        "events": [
            { "event": "Robbery", "confidence": 0.7, "time": "00:00:04" },
            { "event": "Fighting", "confidence": 0.6, "time": "00:00:08" }
        ]
    }))
    .unwrap();
    assert_eq!(response.into_events().len(), 2);
}

#[test]
fn simulation_result_tolerates_no_alerts() {
    let result: SimulationResult = serde_json::from_value(serde_json::json!({
        "video": "datasets/ucf_crime/test/Normal/Normal001.mp4",
        "first_prediction": "Normal",
        "probability": 0.12,
        "alert_types": [],
        "incident_id": null,
        "clip_id": null,
        "saved_clip_path": null
    }))
    .unwrap();
    assert!(result.alert_types.is_empty());
    assert_eq!(result.incident_id, None);
}
