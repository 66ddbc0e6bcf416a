//! Customer account endpoints plus the per-role login/profile dispatch.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, ApiRequest, MessageResponse};
use crate::net::error::ApiError;
use crate::net::types::{Account, Role};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyEmail {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailOnly {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPassword {
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// Login response for every role. Technician and admin endpoints name the
/// profile after the role.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(alias = "technician", alias = "admin")]
    pub user: Account,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct ProfileResponse {
    #[serde(alias = "technician", alias = "admin")]
    user: Account,
}

pub fn register_request(payload: &RegisterUser) -> ApiRequest {
    ApiRequest::post("/auth/register").json(payload)
}

/// Login endpoint for a role.
pub fn login_request(role: Role, credentials: &Credentials) -> ApiRequest {
    let path = match role {
        Role::User => "/auth/login",
        Role::Technician => "/technician/login",
        Role::Admin => "/admin/login",
    };
    ApiRequest::post(path).json(credentials)
}

/// Profile endpoint for a role.
pub fn profile_request(role: Role) -> ApiRequest {
    match role {
        Role::User => ApiRequest::get("/auth/profile"),
        Role::Technician => ApiRequest::get("/technician/profile"),
        Role::Admin => ApiRequest::get("/admin/profile"),
    }
}

pub fn verify_email_request(payload: &VerifyEmail) -> ApiRequest {
    ApiRequest::post("/auth/verify-email").json(payload)
}

pub fn resend_verification_request(email: &str) -> ApiRequest {
    ApiRequest::post("/auth/resend-verification").json(&EmailOnly { email: email.to_owned() })
}

pub fn forgot_password_request(email: &str) -> ApiRequest {
    ApiRequest::post("/auth/forgot-password").json(&EmailOnly { email: email.to_owned() })
}

pub fn reset_password_request(token: &str, password: &str) -> ApiRequest {
    ApiRequest::post(format!("/auth/reset-password/{}", urlencoding::encode(token))).json(&NewPassword { password: password.to_owned() })
}

pub fn update_profile_request(payload: &ProfileUpdate) -> ApiRequest {
    ApiRequest::put("/auth/profile").json(payload)
}

pub fn change_password_request(payload: &PasswordChange) -> ApiRequest {
    ApiRequest::put("/auth/change-password").json(payload)
}

/// Register a customer account. The backend emails a verification code.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn register(client: &ApiClient, payload: &RegisterUser) -> Result<String, ApiError> {
    let body: MessageResponse = client.send(register_request(payload)).await?;
    Ok(body.message)
}

/// Log in as `role`.
///
/// # Errors
///
/// Propagates any [`ApiError`]; unverified accounts answer with status 403.
pub async fn login(client: &ApiClient, role: Role, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    client.send(login_request(role, credentials)).await
}

/// Fetch the signed-in account's profile for `role`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn fetch_profile(client: &ApiClient, role: Role) -> Result<Account, ApiError> {
    let body: ProfileResponse = client.send(profile_request(role)).await?;
    Ok(body.user)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn verify_email(client: &ApiClient, payload: &VerifyEmail) -> Result<String, ApiError> {
    let body: MessageResponse = client.send(verify_email_request(payload)).await?;
    Ok(body.message)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn resend_verification(client: &ApiClient, email: &str) -> Result<String, ApiError> {
    let body: MessageResponse = client.send(resend_verification_request(email)).await?;
    Ok(body.message)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn forgot_password(client: &ApiClient, email: &str) -> Result<String, ApiError> {
    let body: MessageResponse = client.send(forgot_password_request(email)).await?;
    Ok(body.message)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn reset_password(client: &ApiClient, token: &str, password: &str) -> Result<String, ApiError> {
    let body: MessageResponse = client.send(reset_password_request(token, password)).await?;
    Ok(body.message)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn update_profile(client: &ApiClient, payload: &ProfileUpdate) -> Result<Account, ApiError> {
    let body: ProfileResponse = client.send(update_profile_request(payload)).await?;
    Ok(body.user)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn change_password(client: &ApiClient, payload: &PasswordChange) -> Result<(), ApiError> {
    client.send_unit(change_password_request(payload)).await
}
