use axum::body::Body;
use axum::http::{Request, header};
use time::macros::datetime;
use tower::ServiceExt as _;

use super::*;

const BOUNDARY: &str = "argus-test-boundary";

fn multipart_body(parts: &[(&str, Option<&str>, Vec<u8>)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(file) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file}\"\r\nContent-Type: image/jpeg\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes()),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/frames/upload-dev")
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// sanitize_filename / parse_camera_id
// =============================================================================

#[test]
fn sanitize_filename_keeps_safe_names() {
    assert_eq!(sanitize_filename("camera_1_frame_000003.jpg"), "camera_1_frame_000003.jpg");
}

#[test]
fn sanitize_filename_strips_directories_and_odd_chars() {
    assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_filename("C:\\temp\\my frame(1).jpg"), "my_frame_1_.jpg");
    assert_eq!(sanitize_filename(".hidden.jpg"), "hidden.jpg");
}

#[test]
fn sanitize_filename_falls_back_when_empty() {
    assert_eq!(sanitize_filename(""), FALLBACK_FILENAME);
    assert_eq!(sanitize_filename("dir/"), FALLBACK_FILENAME);
    assert_eq!(sanitize_filename(".."), FALLBACK_FILENAME);
}

#[test]
fn parse_camera_id_accepts_trimmed_integers() {
    assert_eq!(parse_camera_id(Some(" 12 ")).unwrap(), 12);
}

#[test]
fn parse_camera_id_rejects_missing_and_non_integer() {
    assert!(matches!(parse_camera_id(None), Err(FrameUploadError::MissingField("camera_id"))));
    assert!(matches!(parse_camera_id(Some("lobby")), Err(FrameUploadError::InvalidCameraId(_))));
}

#[test]
fn client_errors_map_to_bad_request() {
    assert_eq!(FrameUploadError::MissingField("file").status(), StatusCode::BAD_REQUEST);
    assert_eq!(FrameUploadError::InvalidCameraId("x".to_owned()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        FrameUploadError::Io(std::io::Error::other("disk full")).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// store_frame
// =============================================================================

#[tokio::test]
async fn store_frame_writes_under_camera_directory() {
    let dir = tempfile::tempdir().unwrap();
    let upload = FrameUpload {
        camera_id: 3,
        timestamp: Some("2025-03-01T10:15:00Z".to_owned()),
        filename: "snap.jpg".to_owned(),
        bytes: vec![0xFF, 0xD8, 0xFF],
    };
    let now = datetime!(2025-03-01 10:15:02 UTC);

    let receipt = store_frame(dir.path(), upload, now).await.unwrap();

    let expected = dir.path().join("camera_3").join(format!("dev_frame_{}_snap.jpg", now.unix_timestamp()));
    assert_eq!(receipt.status, "received");
    assert_eq!(receipt.path, expected.display().to_string());
    assert_eq!(receipt.received_at, "2025-03-01T10:15:02Z");
    assert_eq!(tokio::fs::read(&expected).await.unwrap(), vec![0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn store_frame_reports_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the camera directory should go.
    tokio::fs::write(dir.path().join("camera_5"), b"blocker").await.unwrap();
    let upload = FrameUpload { camera_id: 5, timestamp: None, filename: "a.jpg".to_owned(), bytes: vec![1] };

    let err = store_frame(dir.path(), upload, OffsetDateTime::now_utc()).await.unwrap_err();
    assert!(matches!(err, FrameUploadError::Io(_)));
}

// =============================================================================
// Route
// =============================================================================

#[tokio::test]
async fn upload_route_stores_frame_and_returns_receipt() {
    let dir = tempfile::tempdir().unwrap();
    let app = super::super::frames_routes(dir.path().to_path_buf());
    let body = multipart_body(&[
        ("camera_id", None, b"7".to_vec()),
        ("timestamp", None, b"2025-03-01T10:15:00.000Z".to_vec()),
        ("file", Some("camera_7_frame_000001.jpg"), vec![0xFF, 0xD8, 0xFF, 0xD9]),
    ]);

    let resp = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = json_body(resp).await;
    assert_eq!(json["status"], "received");
    let path = PathBuf::from(json["path"].as_str().unwrap());
    assert!(path.starts_with(dir.path().join("camera_7")));
    assert!(path.file_name().unwrap().to_string_lossy().ends_with("_camera_7_frame_000001.jpg"));
    assert_eq!(tokio::fs::read(&path).await.unwrap(), vec![0xFF, 0xD8, 0xFF, 0xD9]);
}

#[tokio::test]
async fn upload_route_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let app = super::super::frames_routes(dir.path().to_path_buf());
    let body = multipart_body(&[("camera_id", None, b"7".to_vec())]);

    let resp = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["detail"], "missing form field: file");
}

#[tokio::test]
async fn upload_route_rejects_non_integer_camera() {
    let dir = tempfile::tempdir().unwrap();
    let app = super::super::frames_routes(dir.path().to_path_buf());
    let body = multipart_body(&[("camera_id", None, b"lobby".to_vec()), ("file", Some("a.jpg"), b"x".to_vec())]);

    let resp = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["detail"], "camera_id must be an integer, got \"lobby\"");
}
