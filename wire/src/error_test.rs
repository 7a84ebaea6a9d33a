use super::*;

#[test]
fn extract_detail_reads_string_detail() {
    let body = r#"{"detail":"Email atau password salah"}"#;
    assert_eq!(extract_detail(body).as_deref(), Some("Email atau password salah"));
}

#[test]
fn extract_detail_joins_validation_messages() {
    let body = r#"{"detail":[
        {"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},
        {"loc":["body","password"],"msg":"String should have at least 6 characters","type":"string_too_short"}
    ]}"#;
    assert_eq!(
        extract_detail(body).as_deref(),
        Some("value is not a valid email address; String should have at least 6 characters")
    );
}

#[test]
fn extract_detail_ignores_non_json_and_missing_detail() {
    assert_eq!(extract_detail("<html>502 Bad Gateway</html>"), None);
    assert_eq!(extract_detail(r#"{"message":"nope"}"#), None);
    assert_eq!(extract_detail(r#"{"detail":"   "}"#), None);
}

#[test]
fn from_status_uses_fallback_without_detail() {
    let err = ApiError::from_status(500, "Internal Server Error", "Login gagal");
    assert_eq!(err, ApiError::Server { status: 500, detail: "Login gagal".to_owned() });
    assert_eq!(err.user_message(), "Login gagal");
    assert_eq!(err.status(), Some(500));
}

#[test]
fn server_error_message_is_verbatim() {
    let err = ApiError::from_status(401, r#"{"detail":"Token tidak valid"}"#, "Login gagal");
    assert_eq!(err.user_message(), "Token tidak valid");
    assert_eq!(err.to_string(), "Token tidak valid");
}

#[test]
fn transport_error_maps_to_connection_message() {
    let err = ApiError::Transport("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.user_message(), CONNECTION_ERROR_MESSAGE);
    assert_eq!(err.status(), None);
}
