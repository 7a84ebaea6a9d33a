use super::*;

#[test]
fn login_response_user_defaults_missing_fields() {
    let body = serde_json::json!({
        "access_token": "T1",
        "token_type": "bearer",
        "user": {"id": 4, "full_name": "Ana", "email": "a@x.com", "role": "user"}
    });
    let resp: TokenResponse = serde_json::from_value(body).expect("token response");
    assert_eq!(resp.access_token, "T1");
    assert_eq!(resp.user.role, Role::User);
    assert!(resp.user.is_active);
    assert!(resp.user.whatsapp.is_none());
    assert!(resp.user.created_at.is_none());
    assert!(!resp.user.is_admin());
}

#[test]
fn unknown_role_is_never_admin() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1, "full_name": "Ops", "email": "ops@x.com", "role": "superuser"
    }))
    .expect("user");
    assert_eq!(user.role, Role::Other);
    assert!(!user.is_admin());
}

#[test]
fn me_response_parses_full_profile() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 2,
        "full_name": "Admin PMB",
        "email": "admin@unikadelasalle.ac.id",
        "whatsapp": null,
        "role": "admin",
        "is_active": true,
        "created_at": "2025-01-05T10:00:00.123456+07:00"
    }))
    .expect("user");
    assert!(user.is_admin());
    assert_eq!(user.created_at.map(Timestamp::format_date).as_deref(), Some("05 Jan 2025"));
}

#[test]
fn timestamp_accepts_naive_and_offset_forms() {
    let naive = Timestamp::parse("2025-02-01T08:30:00.5").expect("naive");
    let offset = Timestamp::parse("2025-02-01T08:30:00.5+00:00").expect("offset");
    assert_eq!(naive, offset);
    assert_eq!(naive.format_short(), "01 Feb 2025 08:30");
    assert_eq!(naive.format_long(), "01 February 2025, 08:30");
    assert!(Timestamp::parse("yesterday").is_none());
}

#[test]
fn chat_history_page_parses() {
    let page: ChatHistory = serde_json::from_value(serde_json::json!({
        "total": 41,
        "logs": [{
            "id": 9,
            "user_message": "Jadwal pendaftaran",
            "bot_response": "Pendaftaran dibuka bulan Maret.",
            "intent_tag": "jadwal",
            "confidence": 0.876,
            "created_at": "2025-03-01T09:00:00"
        }]
    }))
    .expect("history");
    assert_eq!(page.total, 41);
    assert_eq!(confidence_percent(page.logs[0].confidence), 88);
}

#[test]
fn confidence_percent_treats_missing_as_zero() {
    assert_eq!(confidence_percent(None), 0);
    assert_eq!(confidence_percent(Some(0.5)), 50);
}

#[test]
fn register_request_serializes_absent_whatsapp_as_null() {
    let req = RegisterRequest {
        full_name: "Ana".to_owned(),
        email: "a@x.com".to_owned(),
        password: "secret1".to_owned(),
        whatsapp: None,
    };
    assert_eq!(
        serde_json::to_value(&req).expect("json"),
        serde_json::json!({"full_name": "Ana", "email": "a@x.com", "password": "secret1", "whatsapp": null})
    );
}
