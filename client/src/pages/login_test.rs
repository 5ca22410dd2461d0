use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  ops@example.com ", " secret "),
        Ok(("ops@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Please enter both email and password."));
    assert_eq!(validate_login_input("ops@example.com", ""), Err("Please enter both email and password."));
}

#[test]
fn login_error_message_prefers_backend_detail() {
    let error = ApiError::Status { status: 401, detail: "Incorrect email or password".to_owned() };
    assert_eq!(login_error_message(&error), "Incorrect email or password");
}

#[test]
fn login_error_message_falls_back_to_generic_text() {
    let error = ApiError::Status { status: 500, detail: String::new() };
    assert_eq!(login_error_message(&error), "Login failed. Please check your credentials.");
    assert_eq!(login_error_message(&ApiError::Decode("eof".to_owned())), "Login failed. Please check your credentials.");
}

#[test]
fn login_error_message_reports_unreachable_server() {
    let error = ApiError::Network("connection refused".to_owned());
    assert_eq!(login_error_message(&error), "Unable to reach the server. Please try again.");
}

#[test]
fn registered_flag_accepts_one_or_true() {
    assert!(registered_flag(Some("1".to_owned())));
    assert!(registered_flag(Some("true".to_owned())));
    assert!(!registered_flag(Some("0".to_owned())));
    assert!(!registered_flag(None));
}
