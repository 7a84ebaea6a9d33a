use super::*;
use wire::MessageResponse;

#[test]
fn success_body_decodes() {
    let decoded: MessageResponse = decode(200, r#"{"message":"ok"}"#, REQUEST_FAILED).unwrap();
    assert_eq!(decoded.message, "ok");
}

#[test]
fn error_status_carries_backend_detail() {
    let err = decode::<MessageResponse>(400, r#"{"detail":"Email sudah terdaftar"}"#, REQUEST_FAILED).unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "Email sudah terdaftar");
}

#[test]
fn error_without_detail_uses_fallback() {
    let err = decode::<MessageResponse>(500, "", "Gagal menghapus").unwrap_err();
    assert_eq!(err.user_message(), "Gagal menghapus");
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let err = decode::<MessageResponse>(200, "<html>", REQUEST_FAILED).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let backend = ReqwestAuthBackend::new(Api::new("http://127.0.0.1:9/api"));
    let err = backend.current_user("T1").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.user_message(), wire::CONNECTION_ERROR_MESSAGE);
}
