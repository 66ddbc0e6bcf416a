//! Where the login page navigates after a login attempt.

#[cfg(test)]
#[path = "login_flow_test.rs"]
mod login_flow_test;

use crate::net::error::ApiError;
use crate::net::types::Role;

pub const VERIFY_EMAIL_PATH: &str = "/verify-email";
/// Pause before the unverified-account redirect so the message can be read.
pub const VERIFY_REDIRECT_DELAY_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Dashboard(&'static str),
    /// Show `message`, then go to the verification page after the delay.
    VerifyEmail { message: String },
    Failed(String),
}

pub fn on_success(role: Role) -> LoginOutcome {
    LoginOutcome::Dashboard(role.dashboard_path())
}

/// Classify a failed login.
pub fn on_error(err: &ApiError) -> LoginOutcome {
    if needs_verification(err) {
        LoginOutcome::VerifyEmail { message: err.to_string() }
    } else {
        LoginOutcome::Failed(err.to_string())
    }
}

/// A 403 whose server message mentions email verification.
pub fn needs_verification(err: &ApiError) -> bool {
    match err {
        ApiError::Status { status: 403, message } => message.to_ascii_lowercase().contains("verif"),
        _ => false,
    }
}
