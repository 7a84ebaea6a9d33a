use super::*;
use wire::{IntentResponse, Pattern};

fn intent() -> Intent {
    Intent {
        id: 3,
        tag: "biaya".to_owned(),
        created_at: None,
        updated_at: None,
        patterns: vec![
            Pattern { id: 1, intent_id: 3, pattern_text: "Berapa biayanya?".to_owned(), created_at: None },
            Pattern { id: 2, intent_id: 3, pattern_text: "Biaya kuliah".to_owned(), created_at: None },
        ],
        responses: vec![IntentResponse {
            id: 5,
            intent_id: 3,
            response_text: "Biaya pendaftaran Rp 150.000".to_owned(),
            created_at: None,
        }],
    }
}

#[test]
fn new_form_is_open_and_empty() {
    let form = IntentForm::new_intent();
    assert!(form.open);
    assert_eq!(form.editing, None);
    assert_eq!(form.title(), "Tambah Intent Baru");
}

#[test]
fn edit_form_joins_lists_by_line() {
    let form = IntentForm::edit(&intent());
    assert_eq!(form.editing, Some(3));
    assert_eq!(form.title(), "Edit Intent");
    assert_eq!(form.patterns, "Berapa biayanya?\nBiaya kuliah");
    assert_eq!(form.responses, "Biaya pendaftaran Rp 150.000");
}

#[test]
fn inbox_message_is_appended_to_patterns() {
    let mut form = IntentForm::default();
    form.add_pattern("kapan daftar?");
    assert!(form.open);
    assert_eq!(form.patterns, "kapan daftar?");
    form.add_pattern("jadwal tes");
    assert_eq!(form.patterns, "kapan daftar?\njadwal tes");
}

#[test]
fn payload_drops_blank_lines() {
    let form = IntentForm {
        tag: " info_biaya ".to_owned(),
        patterns: "a\n\n  b \n".to_owned(),
        responses: "r1".to_owned(),
        ..IntentForm::new_intent()
    };
    let payload = form.payload();
    assert_eq!(payload.tag, "info_biaya");
    assert_eq!(payload.patterns, vec!["a", "b"]);
    assert_eq!(payload.responses, vec!["r1"]);
}

#[test]
fn adding_sends_full_lists() {
    let update = with_added(&intent(), IntentList::Patterns, " Biaya semester ").expect("update");
    assert_eq!(update.tag.as_deref(), Some("biaya"));
    assert_eq!(
        update.patterns,
        Some(vec!["Berapa biayanya?".to_owned(), "Biaya kuliah".to_owned(), "Biaya semester".to_owned()])
    );
    assert_eq!(update.responses, Some(vec!["Biaya pendaftaran Rp 150.000".to_owned()]));
}

#[test]
fn adding_blank_text_is_ignored() {
    assert_eq!(with_added(&intent(), IntentList::Responses, "   "), None);
}

#[test]
fn removing_filters_matching_text() {
    let update = with_removed(&intent(), IntentList::Patterns, "Biaya kuliah");
    assert_eq!(update.patterns, Some(vec!["Berapa biayanya?".to_owned()]));
    let update = with_removed(&intent(), IntentList::Responses, "Biaya pendaftaran Rp 150.000");
    assert_eq!(update.responses, Some(Vec::new()));
}
