use super::*;

#[test]
fn quoted_filename_is_extracted() {
    assert_eq!(
        filename_from_content_disposition(r#"attachment; filename="consolidated_evidence_3_12.mp4""#),
        Some("consolidated_evidence_3_12.mp4".to_owned())
    );
}

#[test]
fn bare_filename_is_extracted() {
    assert_eq!(
        filename_from_content_disposition("attachment; filename=clip.mp4"),
        Some("clip.mp4".to_owned())
    );
}

#[test]
fn extended_filename_wins_and_is_decoded() {
    assert_eq!(
        filename_from_content_disposition("attachment; filename=\"fallback.mp4\"; filename*=UTF-8''cam%201%20clip.mp4"),
        Some("cam 1 clip.mp4".to_owned())
    );
}

#[test]
fn header_without_filename_yields_none() {
    assert_eq!(filename_from_content_disposition("inline"), None);
    assert_eq!(filename_from_content_disposition("attachment; filename=\"\""), None);
}

#[test]
fn malformed_percent_escape_is_kept() {
    assert_eq!(percent_decode("a%zzb%4"), "a%zzb%4");
}

#[test]
fn fallback_name_encodes_ids() {
    assert_eq!(fallback_clip_filename(12, 5), "incident_12_clip_5.mp4");
}
