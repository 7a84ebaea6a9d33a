use super::*;

fn sample_intent() -> Intent {
    serde_json::from_value(serde_json::json!({
        "id": 7,
        "tag": "info_biaya",
        "created_at": "2025-01-05T10:00:00+00:00",
        "updated_at": null,
        "patterns": [
            {"id": 1, "intent_id": 7, "pattern_text": "Berapa biayanya?", "created_at": "2025-01-05T10:00:00+00:00"},
            {"id": 2, "intent_id": 7, "pattern_text": "Biaya pendaftaran berapa?", "created_at": "2025-01-05T10:00:00+00:00"}
        ],
        "responses": [
            {"id": 3, "intent_id": 7, "response_text": "Biaya pendaftaran adalah Rp 150.000", "created_at": "2025-01-05T10:00:00+00:00"}
        ]
    }))
    .expect("intent")
}

#[test]
fn split_lines_drops_blank_lines_and_trims() {
    assert_eq!(
        split_lines("Berapa biayanya?\n\n   \n  Biaya pendaftaran berapa?  \n"),
        vec!["Berapa biayanya?".to_owned(), "Biaya pendaftaran berapa?".to_owned()]
    );
    assert!(split_lines("").is_empty());
}

#[test]
fn from_form_builds_payload() {
    let payload = IntentPayload::from_form(" info_biaya ", "a\nb\n", "x");
    assert_eq!(payload.tag, "info_biaya");
    assert_eq!(payload.patterns, vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(payload.responses, vec!["x".to_owned()]);
}

#[test]
fn append_line_handles_empty_text() {
    assert_eq!(append_line("", "Kapan tes?"), "Kapan tes?");
    assert_eq!(append_line("a", "Kapan tes?"), "a\nKapan tes?");
}

#[test]
fn intent_texts_follow_server_order() {
    let intent = sample_intent();
    assert_eq!(intent.pattern_texts(), vec!["Berapa biayanya?", "Biaya pendaftaran berapa?"]);
    assert_eq!(intent.response_texts(), vec!["Biaya pendaftaran adalah Rp 150.000"]);
}

#[test]
fn to_update_carries_every_field() {
    let update = sample_intent().to_update();
    assert_eq!(update.tag.as_deref(), Some("info_biaya"));
    assert_eq!(update.patterns.map(|p| p.len()), Some(2));
    assert_eq!(update.responses.map(|r| r.len()), Some(1));
}

#[test]
fn partial_update_omits_absent_fields() {
    let update = IntentUpdate { patterns: Some(vec!["a".to_owned()]), ..IntentUpdate::default() };
    assert_eq!(serde_json::to_value(&update).expect("json"), serde_json::json!({ "patterns": ["a"] }));
}

#[test]
fn retrain_result_accepts_message_only() {
    let result: RetrainResult =
        serde_json::from_str(r#"{"message":"Model trained successfully!"}"#).expect("retrain");
    assert_eq!(result.message, "Model trained successfully!");
    assert!(result.metrics.is_none());
}
