use super::*;

#[test]
fn incidents_endpoint_carries_limit() {
    assert_eq!(incidents_endpoint(DEFAULT_INCIDENT_LIMIT), "/incidents?limit=100");
    assert_eq!(incidents_endpoint(5), "/incidents?limit=5");
}

#[test]
fn incident_endpoint_formats_expected_path() {
    assert_eq!(incident_endpoint(42), "/incidents/42");
}

#[test]
fn clip_endpoint_formats_expected_path() {
    assert_eq!(clip_endpoint(9), "/clips/9");
}

#[test]
fn simulate_endpoint_encodes_email_flag() {
    assert_eq!(simulate_endpoint(3, true), "/api/simulate/cameras/3?send_email=true");
    assert_eq!(simulate_endpoint(3, false), "/api/simulate/cameras/3?send_email=false");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}

#[test]
fn unauthorized_on_authorized_request_expires_session() {
    assert!(expires_session(true, 401));
}

#[test]
fn unauthorized_on_login_is_a_credential_error() {
    assert!(!expires_session(false, 401));
}

#[test]
fn other_failures_keep_the_session() {
    for status in [400, 403, 404, 422, 500] {
        assert!(!expires_session(true, status), "status {status}");
    }
}

#[test]
fn calls_are_unavailable_outside_the_browser() {
    let result = block_on_ready(current_user());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Drive a future that never awaits anything pending to completion.
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
