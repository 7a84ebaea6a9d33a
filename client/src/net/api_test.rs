use super::*;

#[test]
fn call_url_joins_base_and_path() {
    let call = ApiCall::get(endpoints::INTENTS);
    assert_eq!(call.url("http://localhost:8000/api/"), "http://localhost:8000/api/intents/");
}

#[test]
fn json_call_carries_serialized_body() {
    let req = LoginRequest { email: "a@x.com".to_owned(), password: "secret1".to_owned() };
    let call = ApiCall::with_json(Method::Post, endpoints::AUTH_LOGIN, &req).expect("encode");
    assert_eq!(call.method, Method::Post);
    assert_eq!(call.body, Some(serde_json::json!({"email": "a@x.com", "password": "secret1"})));
    assert_eq!(call.fallback, REQUEST_FAILED);
}

#[test]
fn bearer_and_fallback_builders() {
    let call = ApiCall::delete(endpoints::user(9)).bearer("T1").fallback(DELETE_FAILED);
    assert_eq!(call.path, "/auth/users/9");
    assert_eq!(call.bearer.as_deref(), Some("T1"));
    assert_eq!(call.fallback, "Gagal menghapus");
}

#[test]
fn decode_success_body() {
    let reply: ChatReply =
        decode(200, r#"{"reply":"Halo","intent":"salam","confidence":0.91}"#, REQUEST_FAILED).expect("reply");
    assert_eq!(reply.reply, "Halo");
    assert_eq!(reply.intent.as_deref(), Some("salam"));
}

#[test]
fn decode_error_keeps_server_detail() {
    let err = decode::<TokenResponse>(401, r#"{"detail":"Email atau password salah"}"#, LOGIN_FAILED).unwrap_err();
    assert_eq!(err, ApiError::Server { status: 401, detail: "Email atau password salah".to_owned() });
}

#[test]
fn decode_error_without_detail_uses_fallback() {
    let err = decode::<User>(500, "Internal Server Error", ADD_ADMIN_FAILED).unwrap_err();
    assert_eq!(err.user_message(), "Gagal menambah admin");
}

#[test]
fn decode_validation_error_array() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"}]}"#;
    let err = decode::<User>(422, body, REGISTER_FAILED).unwrap_err();
    assert_eq!(err.user_message(), "value is not a valid email address");
}

#[test]
fn decode_malformed_success_body() {
    let err = decode::<ChatHistory>(200, "<html>", REQUEST_FAILED).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_send_reports_transport_error() {
    let err = list_intents().await.unwrap_err();
    assert_eq!(err.user_message(), wire::CONNECTION_ERROR_MESSAGE);
}
