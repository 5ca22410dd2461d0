use super::*;

#[test]
fn detail_string_is_returned_verbatim() {
    let body = r#"{"detail":"Incorrect email or password"}"#;
    assert_eq!(detail_from_body(401, body), "Incorrect email or password");
}

#[test]
fn validation_list_joins_messages() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},{"loc":["body","password"],"msg":"field required","type":"missing"}]}"#;
    assert_eq!(
        detail_from_body(422, body),
        "value is not a valid email address; field required"
    );
}

#[test]
fn empty_body_falls_back_to_status() {
    assert_eq!(detail_from_body(502, ""), "request failed: 502");
}

#[test]
fn html_body_falls_back_to_status() {
    assert_eq!(detail_from_body(500, "<html><body>oops</body></html>"), "request failed: 500");
}

#[test]
fn plain_text_body_is_truncated() {
    let body = "x".repeat(500);
    assert_eq!(detail_from_body(500, &body).len(), 200);
}

#[test]
fn status_display_uses_detail() {
    let err = ApiError::Status { status: 404, detail: "incident not found".to_owned() };
    assert_eq!(err.to_string(), "incident not found");
}

#[test]
fn unauthorized_display_asks_for_login() {
    assert_eq!(ApiError::Unauthorized.to_string(), "session expired, please log in again");
}
