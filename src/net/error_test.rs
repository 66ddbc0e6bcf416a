use super::*;

#[test]
fn error_message_prefers_message_field() {
    let body = r#"{"success":false,"message":"Invalid credentials"}"#;
    assert_eq!(error_message_from_body(401, body), "Invalid credentials");
}

#[test]
fn error_message_falls_back_to_error_field() {
    let body = r#"{"error":"Plan not found"}"#;
    assert_eq!(error_message_from_body(404, body), "Plan not found");
}

#[test]
fn error_message_uses_status_for_non_json_or_blank() {
    assert_eq!(error_message_from_body(502, "<html>Bad Gateway</html>"), "request failed: 502");
    assert_eq!(error_message_from_body(500, r#"{"message":"  "}"#), "request failed: 500");
}

#[test]
fn from_response_keeps_status_code() {
    let err = ApiError::from_response(403, r#"{"message":"Please verify your email first"}"#);
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.to_string(), "Please verify your email first");
}

#[test]
fn non_status_errors_have_no_status() {
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
