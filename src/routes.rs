//! Route table and navigation-guard decisions.
//!
//! Routes are declared as data: each entry pairs a path pattern with its
//! `requires_auth` flag, and the guard consults the table before every
//! transition. Paths not in the table are implicitly public.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// The login view. Public; authenticated visitors are bounced home.
pub const LOGIN_PATH: &str = "/login";
/// The default view after login.
pub const HOME_PATH: &str = "/";

/// A navigable route and whether it requires an authenticated session.
#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    /// Path pattern; `:name` segments match any single segment.
    pub path: &'static str,
    pub requires_auth: bool,
}

/// Every route the client exposes.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { path: "/login", requires_auth: false },
    RouteEntry { path: "/", requires_auth: true },
    RouteEntry { path: "/videos", requires_auth: true },
    RouteEntry { path: "/interfaces", requires_auth: true },
    RouteEntry { path: "/interfaces/:id", requires_auth: true },
];

/// What the guard decided about a pending transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed unmodified.
    Allow,
    /// Abort and go to [`LOGIN_PATH`].
    RedirectToLogin,
    /// Abort and go to [`HOME_PATH`].
    RedirectToHome,
}

/// Segment-wise pattern match; `:param` segments match any non-empty segment.
fn path_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segs = pattern.trim_matches('/').split('/');
    let mut path_segs = path.trim_matches('/').split('/');
    loop {
        match (pattern_segs.next(), path_segs.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) => {
                if p.starts_with(':') {
                    if s.is_empty() {
                        return false;
                    }
                } else if p != s {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// True iff the path matches a route marked `requires_auth`.
/// Unmatched paths are public.
pub fn requires_auth(path: &str) -> bool {
    ROUTE_TABLE
        .iter()
        .find(|entry| path_matches(entry.path, path))
        .is_some_and(|entry| entry.requires_auth)
}

/// Guard decision table, first match wins:
/// protected + unauthenticated → login; login + authenticated → home;
/// otherwise allow.
pub fn check_transition(target: &str, authenticated: bool) -> GuardDecision {
    if requires_auth(target) && !authenticated {
        GuardDecision::RedirectToLogin
    } else if path_matches(LOGIN_PATH, target) && authenticated {
        GuardDecision::RedirectToHome
    } else {
        GuardDecision::Allow
    }
}
