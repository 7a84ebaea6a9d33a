use super::*;

#[test]
fn tab_labels_include_counts() {
    assert_eq!(UserTab::Users.label(3), "Pengguna (3)");
    assert_eq!(UserTab::Admins.label(0), "Admin (0)");
}

#[test]
fn whatsapp_column_only_for_visitors() {
    assert!(UserTab::Users.shows_whatsapp());
    assert!(!UserTab::Admins.shows_whatsapp());
}

#[test]
fn default_tab_is_visitors() {
    assert_eq!(UserTab::default(), UserTab::Users);
}

#[test]
fn created_label_formats_or_dashes() {
    assert_eq!(created_label(None), "-");
    let ts = Timestamp::parse("2025-01-05T10:30:00").expect("timestamp");
    assert_eq!(created_label(Some(ts)), "05 Jan 2025");
}
