use super::*;

#[test]
fn missing_or_blank_value_uses_default() {
    assert_eq!(resolve(None), DEFAULT_API_BASE);
    assert_eq!(resolve(Some("  ")), DEFAULT_API_BASE);
}

#[test]
fn configured_value_is_trimmed() {
    assert_eq!(resolve(Some(" https://pmb.example.ac.id/api ")), "https://pmb.example.ac.id/api");
}
