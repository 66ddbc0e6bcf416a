use super::*;
use crate::net::types::Account;
use crate::state::session::Session;

fn signed_in(role: Role) -> AuthState {
    AuthState {
        session: Some(Session { token: "tok".to_owned(), user: Account::default(), role }),
        is_loading: false,
    }
}

fn signed_out() -> AuthState {
    AuthState { session: None, is_loading: false }
}

#[test]
fn loading_state_is_pending_regardless_of_session() {
    assert_eq!(decide(&AuthState::default(), &[Role::User]), GuardDecision::Pending);
    let mut state = signed_in(Role::Admin);
    state.is_loading = true;
    assert_eq!(decide(&state, &[Role::User]), GuardDecision::Pending);
}

#[test]
fn missing_session_redirects_to_login() {
    assert_eq!(decide(&signed_out(), &[Role::User]), GuardDecision::RedirectTo("/login"));
    assert_eq!(decide(&signed_out(), &[]), GuardDecision::RedirectTo("/login"));
}

#[test]
fn allowed_role_renders_children() {
    assert_eq!(decide(&signed_in(Role::User), &[Role::User]), GuardDecision::Allow);
    assert_eq!(
        decide(&signed_in(Role::Technician), &[Role::User, Role::Technician]),
        GuardDecision::Allow
    );
}

#[test]
fn disallowed_role_goes_to_own_dashboard() {
    for role in Role::ALL {
        let others: Vec<Role> = Role::ALL.into_iter().filter(|r| *r != role).collect();
        assert_eq!(
            decide(&signed_in(role), &others),
            GuardDecision::RedirectTo(role.dashboard_path()),
            "{role}"
        );
    }
}

#[test]
fn empty_allow_list_admits_any_role() {
    for role in Role::ALL {
        assert_eq!(decide(&signed_in(role), &[]), GuardDecision::Allow);
    }
}

#[test]
fn home_for_sends_signed_in_visitors_to_dashboard() {
    assert_eq!(home_for(&signed_in(Role::Admin)), Some("/admin/dashboard"));
    assert_eq!(home_for(&signed_out()), None);
    assert_eq!(home_for(&AuthState::default()), None);
}
