//! Role-based navigation decisions.
//!
//! `ProtectedRoute` renders whatever [`decide`] returns; keeping the decision a
//! plain function of [`AuthState`] means every redirect rule is covered by
//! native tests.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// What a protected route should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Stored session not read yet; show a placeholder.
    Pending,
    RedirectTo(&'static str),
    Allow,
}

/// Gate a route on the signed-in role.
///
/// An empty `allowed` set admits any signed-in role.
pub fn decide(state: &AuthState, allowed: &[Role]) -> GuardDecision {
    if state.is_loading {
        return GuardDecision::Pending;
    }
    let (Some(_), Some(role)) = (state.token(), state.role()) else {
        return GuardDecision::RedirectTo(LOGIN_PATH);
    };
    if allowed.is_empty() || allowed.contains(&role) {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectTo(role.dashboard_path())
    }
}

/// Where a signed-in visitor of a public-only page (login, register) goes.
pub fn home_for(state: &AuthState) -> Option<&'static str> {
    if state.is_loading {
        return None;
    }
    state.role().map(Role::dashboard_path)
}
