//! Shared HTTP request path.
//!
//! Every API call funnels through here: the outbound side attaches the
//! session token as a bearer credential, the inbound side unwraps the
//! `{code, msg, data}` envelope and routes failures. The inbound handling
//! is a pure pipeline ([`dispose_envelope`] / [`dispose_transport_failure`]
//! decide, [`settle`] applies the decision through the [`FailurePorts`]
//! side effects) so it is testable without a network or a browser.
//!
//! Failure routing, in priority order:
//! 1. HTTP 401 → tear the session down, notify "session expired", fail
//!    the call. The route guard observes the session signal and moves
//!    the user to the login view; the notice stack lives outside the
//!    router, so the message stays on screen across that transition.
//! 2. Any other transport failure (network error, bad status, timeout) →
//!    notify and fail.
//! 3. HTTP success with envelope `code != 0` → notify with `msg` and fail.
//!
//! No retries anywhere; notifications are side effects, the caller always
//! still gets the error.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};
use serde::de::DeserializeOwned;

use crate::net::types::Envelope;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStore;

/// Prefix for every request.
pub const BASE_PATH: &str = "/api";
/// Default per-request timeout. A tunable default, not a contract.
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

const BUSINESS_FALLBACK: &str = "request failed";
const TRANSPORT_FALLBACK: &str = "network error";
const SESSION_EXPIRED: &str = "session expired, please log in again";

/// How an API call failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Envelope `code != 0` on an otherwise-successful exchange.
    #[error("{0}")]
    Business(String),
    /// HTTP 401; the session has been torn down.
    #[error("session expired")]
    Unauthorized,
    /// Network failure, timeout, or non-401 error status.
    #[error("{0}")]
    Transport(String),
}

/// HTTP method of an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// What the pipeline decided to do with a settled exchange.
#[derive(Debug, PartialEq)]
pub enum Disposition<T> {
    /// Resolve the call with the envelope's payload.
    Resolve(Option<T>),
    /// Fail the call and show `notice` to the user.
    Fail { error: ApiError, notice: String },
    /// 401: clear the session, show `notice`, fail the call.
    ExpireSession { notice: String },
}

/// Decide what to do with a successfully parsed envelope.
pub fn dispose_envelope<T>(envelope: Envelope<T>) -> Disposition<T> {
    if envelope.code == 0 {
        Disposition::Resolve(envelope.data)
    } else {
        let message = envelope
            .msg
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| BUSINESS_FALLBACK.to_owned());
        Disposition::Fail {
            error: ApiError::Business(message.clone()),
            notice: message,
        }
    }
}

/// Decide what to do with a transport-level failure. The 401 branch takes
/// priority over the generic branch.
pub fn dispose_transport_failure<T>(
    status: Option<u16>,
    message: Option<String>,
) -> Disposition<T> {
    if status == Some(401) {
        Disposition::ExpireSession {
            notice: SESSION_EXPIRED.to_owned(),
        }
    } else {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| TRANSPORT_FALLBACK.to_owned());
        Disposition::Fail {
            error: ApiError::Transport(message.clone()),
            notice: message,
        }
    }
}

/// Side effects the pipeline may trigger while settling a call.
pub trait FailurePorts {
    /// Tear the session down. Navigation to the login view is the route
    /// guard's job, driven by the session state change.
    fn expire_session(&self);
    /// Show a user-visible notification.
    fn notify(&self, message: &str);
}

/// Apply a [`Disposition`]: run its side effects through `ports` and
/// turn it into the call's result.
pub fn settle<T>(
    disposition: Disposition<T>,
    ports: &impl FailurePorts,
) -> Result<Option<T>, ApiError> {
    match disposition {
        Disposition::Resolve(data) => Ok(data),
        Disposition::Fail { error, notice } => {
            ports.notify(&notice);
            Err(error)
        }
        Disposition::ExpireSession { notice } => {
            ports.expire_session();
            ports.notify(&notice);
            Err(ApiError::Unauthorized)
        }
    }
}

/// Handle to the shared client: the session and UI state signals every
/// call reads and mutates. Provided via context by the root `App`.
#[derive(Clone, Copy)]
pub struct ApiClient {
    pub session: RwSignal<SessionState>,
    pub ui: RwSignal<UiState>,
}

impl ApiClient {
    pub fn new(session: RwSignal<SessionState>, ui: RwSignal<UiState>) -> Self {
        Self { session, ui }
    }

    /// Current token, re-read at send time for every request.
    fn token(&self) -> String {
        self.session.with_untracked(|s| s.token.clone())
    }
}

impl FailurePorts for ApiClient {
    fn expire_session(&self) {
        self.session.update(|s| s.logout(&BrowserStore));
    }

    fn notify(&self, message: &str) {
        self.ui.update(|u| u.push_notice(message));
    }
}

/// `Authorization` header value for a session token. Empty tokens get
/// no header at all, never an empty `Bearer `.
pub fn bearer_header(token: &str) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {token}"))
    }
}

/// Send a request whose success payload must be present.
pub async fn request<T: DeserializeOwned>(
    api: ApiClient,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    match dispatch::<T>(api, method, path, body).await? {
        Some(data) => Ok(data),
        None => Err(ApiError::Transport("response carried no data".to_owned())),
    }
}

/// Send a request whose success payload is empty or irrelevant
/// (deletes, bulk saves).
pub async fn request_unit(
    api: ApiClient,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    dispatch::<serde_json::Value>(api, method, path, body)
        .await
        .map(|_| ())
}

async fn dispatch<T: DeserializeOwned>(
    api: ApiClient,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<Option<T>, ApiError> {
    #[cfg(feature = "csr")]
    {
        send(api, method, path, body, DEFAULT_TIMEOUT_MS).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api, method, path, body);
        Err(ApiError::Transport(
            "network unavailable outside the browser".to_owned(),
        ))
    }
}

#[cfg(feature = "csr")]
async fn send<T: DeserializeOwned>(
    api: ApiClient,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    timeout_ms: u32,
) -> Result<Option<T>, ApiError> {
    let gloo_method = match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    };

    let url = format!("{BASE_PATH}{path}");
    let mut builder = gloo_net::http::RequestBuilder::new(&url).method(gloo_method);
    if let Some(credential) = bearer_header(&api.token()) {
        builder = builder.header("Authorization", &credential);
    }

    let request = match body {
        Some(value) => builder.json(&value),
        None => builder.build(),
    };
    let request = match request {
        Ok(r) => r,
        Err(e) => {
            return settle(dispose_transport_failure(None, Some(e.to_string())), &api);
        }
    };

    finish(request.send(), timeout_ms, &api).await
}

/// POST a multipart form with a single `file` field.
#[cfg(feature = "csr")]
pub async fn send_multipart<T: DeserializeOwned>(
    api: ApiClient,
    path: &str,
    file: &web_sys::File,
) -> Result<T, ApiError> {
    match send_multipart_inner(api, path, file).await? {
        Some(data) => Ok(data),
        None => Err(ApiError::Transport("response carried no data".to_owned())),
    }
}

#[cfg(feature = "csr")]
async fn send_multipart_inner<T: DeserializeOwned>(
    api: ApiClient,
    path: &str,
    file: &web_sys::File,
) -> Result<Option<T>, ApiError> {
    let form = web_sys::FormData::new()
        .and_then(|f| f.append_with_blob("file", file).map(|()| f));
    let form = match form {
        Ok(f) => f,
        Err(_) => {
            return settle(
                dispose_transport_failure(None, Some("could not build upload form".to_owned())),
                &api,
            );
        }
    };

    let url = format!("{BASE_PATH}{path}");
    let mut builder =
        gloo_net::http::RequestBuilder::new(&url).method(gloo_net::http::Method::POST);
    if let Some(credential) = bearer_header(&api.token()) {
        builder = builder.header("Authorization", &credential);
    }

    let request = match builder.body(form) {
        Ok(r) => r,
        Err(e) => {
            return settle(dispose_transport_failure(None, Some(e.to_string())), &api);
        }
    };

    finish(request.send(), DEFAULT_TIMEOUT_MS, &api).await
}

/// Race the in-flight request against the timeout, then run the response
/// through the pipeline.
#[cfg(feature = "csr")]
async fn finish<T: DeserializeOwned>(
    pending: impl Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
    timeout_ms: u32,
    ports: &impl FailurePorts,
) -> Result<Option<T>, ApiError> {
    use futures::future::{Either, select};
    use std::pin::pin;

    let pending = pin!(pending);
    let timeout = pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));
    let outcome = match select(pending, timeout).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => {
            return settle(
                dispose_transport_failure(
                    None,
                    Some(format!("request timed out after {timeout_ms}ms")),
                ),
                ports,
            );
        }
    };

    let response = match outcome {
        Ok(r) => r,
        Err(e) => {
            return settle(dispose_transport_failure(None, Some(e.to_string())), ports);
        }
    };

    if !response.ok() {
        let status = response.status();
        leptos::logging::warn!("request failed with status {status}");
        return settle(
            dispose_transport_failure(
                Some(status),
                Some(format!("request failed with status {status}")),
            ),
            ports,
        );
    }

    match response.json::<Envelope<T>>().await {
        Ok(envelope) => settle(dispose_envelope(envelope), ports),
        Err(e) => settle(dispose_transport_failure(None, Some(e.to_string())), ports),
    }
}
