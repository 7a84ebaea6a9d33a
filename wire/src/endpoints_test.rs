use super::*;

#[test]
fn url_joins_without_double_slash() {
    assert_eq!(url("http://localhost:8000/api/", AUTH_ME), "http://localhost:8000/api/auth/me");
    assert_eq!(url("http://localhost:8000/api", INTENTS), "http://localhost:8000/api/intents/");
}

#[test]
fn parameterised_paths() {
    assert_eq!(user(12), "/auth/users/12");
    assert_eq!(intent(7), "/intents/7");
    assert_eq!(training_run(3), "/training/history/3");
}

#[test]
fn chat_history_carries_pagination() {
    assert_eq!(chat_history(HISTORY_PAGE_SIZE, 40), "/chat/history?limit=20&offset=40");
}

#[test]
fn retrain_epochs_is_optional() {
    assert_eq!(retrain(None), "/intents/retrain");
    assert_eq!(retrain(Some(150)), "/intents/retrain?epochs=150");
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer("T1"), "Bearer T1");
}
