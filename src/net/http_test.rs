use super::*;
use std::cell::{Cell, RefCell};

use crate::util::storage::MemoryStore;

fn envelope(code: i32, msg: Option<&str>, data: Option<serde_json::Value>) -> Envelope<serde_json::Value> {
    Envelope {
        code,
        msg: msg.map(str::to_owned),
        data,
    }
}

#[derive(Default)]
struct RecordingPorts {
    expired: Cell<bool>,
    notices: RefCell<Vec<String>>,
}

impl FailurePorts for RecordingPorts {
    fn expire_session(&self) {
        self.expired.set(true);
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_owned());
    }
}

// =============================================================
// Envelope disposition
// =============================================================

#[test]
fn zero_code_resolves_with_data_only() {
    let env = envelope(0, Some("success"), Some(serde_json::json!({"foo": 1})));
    assert_eq!(
        dispose_envelope(env),
        Disposition::Resolve(Some(serde_json::json!({"foo": 1})))
    );
}

#[test]
fn zero_code_without_data_resolves_empty() {
    let env = envelope(0, Some("success"), None);
    assert_eq!(dispose_envelope(env), Disposition::Resolve(None));
}

#[test]
fn nonzero_code_fails_with_msg() {
    let env = envelope(5, Some("bad input"), None);
    assert_eq!(
        dispose_envelope(env),
        Disposition::Fail {
            error: ApiError::Business("bad input".to_owned()),
            notice: "bad input".to_owned(),
        }
    );
}

#[test]
fn nonzero_code_without_msg_uses_generic_message() {
    let env = envelope(-1, None, None);
    assert_eq!(
        dispose_envelope(env),
        Disposition::Fail {
            error: ApiError::Business("request failed".to_owned()),
            notice: "request failed".to_owned(),
        }
    );
}

#[test]
fn nonzero_code_with_empty_msg_uses_generic_message() {
    let env = envelope(3, Some(""), Some(serde_json::json!(null)));
    let Disposition::Fail { error, .. } = dispose_envelope(env) else {
        panic!("expected failure");
    };
    assert_eq!(error, ApiError::Business("request failed".to_owned()));
}

// =============================================================
// Transport disposition
// =============================================================

#[test]
fn status_401_expires_the_session() {
    assert_eq!(
        dispose_transport_failure::<serde_json::Value>(Some(401), Some("unauthorized".to_owned())),
        Disposition::ExpireSession {
            notice: "session expired, please log in again".to_owned(),
        }
    );
}

#[test]
fn non_401_status_is_a_plain_transport_failure() {
    assert_eq!(
        dispose_transport_failure::<serde_json::Value>(
            Some(500),
            Some("request failed with status 500".to_owned())
        ),
        Disposition::Fail {
            error: ApiError::Transport("request failed with status 500".to_owned()),
            notice: "request failed with status 500".to_owned(),
        }
    );
}

#[test]
fn network_error_without_message_uses_generic_message() {
    assert_eq!(
        dispose_transport_failure::<serde_json::Value>(None, None),
        Disposition::Fail {
            error: ApiError::Transport("network error".to_owned()),
            notice: "network error".to_owned(),
        }
    );
}

// =============================================================
// Settling through the ports
// =============================================================

#[test]
fn resolve_has_no_side_effects() {
    let ports = RecordingPorts::default();
    let result = settle(Disposition::Resolve(Some(1)), &ports);
    assert_eq!(result, Ok(Some(1)));
    assert!(!ports.expired.get());
    assert!(ports.notices.borrow().is_empty());
}

#[test]
fn business_failure_notifies_exactly_once_and_fails() {
    let ports = RecordingPorts::default();
    let env = envelope(5, Some("bad input"), None);

    let result = settle(dispose_envelope(env), &ports);

    assert_eq!(result, Err(ApiError::Business("bad input".to_owned())));
    assert_eq!(*ports.notices.borrow(), vec!["bad input".to_owned()]);
    assert!(!ports.expired.get());
}

#[test]
fn session_expiry_tears_down_notifies_and_fails() {
    let ports = RecordingPorts::default();

    let result = settle(
        dispose_transport_failure::<serde_json::Value>(Some(401), None),
        &ports,
    );

    assert_eq!(result, Err(ApiError::Unauthorized));
    assert!(ports.expired.get());
    assert_eq!(
        *ports.notices.borrow(),
        vec!["session expired, please log in again".to_owned()]
    );
}

// =============================================================
// 401 against a real session store
// =============================================================

struct SessionPorts {
    session: RefCell<crate::state::session::SessionState>,
    store: MemoryStore,
    notices: RefCell<Vec<String>>,
}

impl SessionPorts {
    fn logged_in() -> Self {
        let store = MemoryStore::new();
        let mut session = crate::state::session::SessionState::default();
        session.set_auth(
            &store,
            "jwt-9".to_owned(),
            crate::net::types::User {
                id: 1,
                username: "ada".to_owned(),
                nickname: None,
            },
        );
        Self {
            session: RefCell::new(session),
            store,
            notices: RefCell::new(Vec::new()),
        }
    }
}

impl FailurePorts for SessionPorts {
    fn expire_session(&self) {
        self.session.borrow_mut().logout(&self.store);
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_owned());
    }
}

#[test]
fn settled_401_leaves_session_logged_out_and_store_cleared() {
    let ports = SessionPorts::logged_in();
    assert!(ports.session.borrow().is_authenticated());

    let result = settle(
        dispose_transport_failure::<serde_json::Value>(Some(401), None),
        &ports,
    );

    assert_eq!(result, Err(ApiError::Unauthorized));
    assert!(!ports.session.borrow().is_authenticated());
    assert!(ports.store.is_empty());
}

#[test]
fn expiry_notice_outlives_the_session_teardown() {
    // The message must still be pending after the teardown, so it can be
    // rendered on the login view the guard moves the user to.
    let ports = SessionPorts::logged_in();

    let _ = settle(
        dispose_transport_failure::<serde_json::Value>(Some(401), None),
        &ports,
    );

    assert!(!ports.session.borrow().is_authenticated());
    assert_eq!(
        *ports.notices.borrow(),
        vec!["session expired, please log in again".to_owned()]
    );
}

#[test]
fn redundant_401s_are_idempotent() {
    let ports = SessionPorts::logged_in();

    // Two in-flight requests both settle with 401.
    let _ = settle(
        dispose_transport_failure::<serde_json::Value>(Some(401), None),
        &ports,
    );
    let _ = settle(
        dispose_transport_failure::<serde_json::Value>(Some(401), None),
        &ports,
    );

    assert!(!ports.session.borrow().is_authenticated());
    assert_eq!(ports.notices.borrow().len(), 2);
}

#[test]
fn client_401_clears_the_session_and_keeps_the_notice() {
    use leptos::prelude::{RwSignal, WithUntracked};

    let mut state = crate::state::session::SessionState::default();
    state.set_auth(
        &MemoryStore::new(),
        "jwt-9".to_owned(),
        crate::net::types::User {
            id: 1,
            username: "ada".to_owned(),
            nickname: None,
        },
    );
    let session = RwSignal::new(state);
    let ui = RwSignal::new(crate::state::ui::UiState::default());
    let api = ApiClient::new(session, ui);

    let result = settle(
        dispose_transport_failure::<serde_json::Value>(Some(401), None),
        &api,
    );

    assert_eq!(result, Err(ApiError::Unauthorized));
    assert!(session.with_untracked(|s| !s.is_authenticated()));
    let messages: Vec<String> = ui.with_untracked(|u| {
        u.notices.iter().map(|n| n.message.clone()).collect()
    });
    assert_eq!(messages, vec!["session expired, please log in again".to_owned()]);
}

// =============================================================
// Bearer credential
// =============================================================

#[test]
fn bearer_header_wraps_a_token() {
    assert_eq!(
        bearer_header("jwt-9").as_deref(),
        Some("Bearer jwt-9")
    );
}

#[test]
fn bearer_header_skips_an_empty_token() {
    assert_eq!(bearer_header(""), None);
}

// =============================================================
// Error display
// =============================================================

#[test]
fn api_error_display_carries_the_message() {
    assert_eq!(ApiError::Business("bad input".to_owned()).to_string(), "bad input");
    assert_eq!(ApiError::Unauthorized.to_string(), "session expired");
    assert_eq!(
        ApiError::Transport("network error".to_owned()).to_string(),
        "network error"
    );
}
