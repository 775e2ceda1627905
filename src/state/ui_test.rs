use super::*;

// =============================================================
// Notice stack
// =============================================================

#[test]
fn ui_state_default_has_no_notices() {
    let state = UiState::default();
    assert!(state.notices.is_empty());
}

#[test]
fn push_notice_appends_in_order() {
    let mut state = UiState::default();
    state.push_notice("first");
    state.push_notice("second");
    let messages: Vec<&str> = state.notices.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn dismiss_removes_only_the_given_notice() {
    let mut state = UiState::default();
    state.push_notice("keep");
    state.push_notice("drop");
    let drop_id = state.notices[1].id;

    state.dismiss(drop_id);

    assert_eq!(state.notices.len(), 1);
    assert_eq!(state.notices[0].message, "keep");
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = UiState::default();
    state.push_notice("keep");
    state.dismiss(uuid::Uuid::new_v4());
    assert_eq!(state.notices.len(), 1);
}
