use super::*;

#[test]
fn success_goes_to_role_dashboard() {
    assert_eq!(on_success(Role::User), LoginOutcome::Dashboard("/user/dashboard"));
    assert_eq!(on_success(Role::Technician), LoginOutcome::Dashboard("/technician/dashboard"));
    assert_eq!(on_success(Role::Admin), LoginOutcome::Dashboard("/admin/dashboard"));
}

#[test]
fn unverified_403_routes_to_verification() {
    let err = ApiError::from_response(403, r#"{"message":"Please verify your email before logging in"}"#);
    assert_eq!(
        on_error(&err),
        LoginOutcome::VerifyEmail { message: "Please verify your email before logging in".to_owned() }
    );
    assert_eq!(VERIFY_REDIRECT_DELAY_MS, 2000);
}

#[test]
fn other_403_is_plain_failure() {
    let err = ApiError::from_response(403, r#"{"message":"Account blocked"}"#);
    assert_eq!(on_error(&err), LoginOutcome::Failed("Account blocked".to_owned()));
}

#[test]
fn verification_wording_on_other_status_is_plain_failure() {
    let err = ApiError::from_response(401, r#"{"message":"Email not verified"}"#);
    assert!(!needs_verification(&err));
    assert!(!needs_verification(&ApiError::Network("verify".to_owned())));
}
