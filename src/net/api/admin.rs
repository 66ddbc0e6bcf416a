//! Admin moderation endpoints.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::{Deserialize, Serialize};

use super::service_requests::RequestList;
use crate::net::client::{ApiClient, ApiRequest};
use crate::net::error::ApiError;
use crate::net::types::{Account, AdminStats, ServiceRequest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct BlockUpdate {
    is_blocked: bool,
}

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    stats: AdminStats,
}

#[derive(Debug, Deserialize)]
struct UserList {
    users: Vec<Account>,
}

#[derive(Debug, Deserialize)]
struct TechnicianList {
    technicians: Vec<Account>,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    #[serde(alias = "technician")]
    user: Account,
}

pub fn stats_request() -> ApiRequest {
    ApiRequest::get("/admin/stats")
}

pub fn users_request() -> ApiRequest {
    ApiRequest::get("/admin/users")
}

pub fn set_user_blocked_request(user_id: &str, is_blocked: bool) -> ApiRequest {
    ApiRequest::put(format!("/admin/users/{}/status", urlencoding::encode(user_id))).json(&BlockUpdate { is_blocked })
}

pub fn technicians_request() -> ApiRequest {
    ApiRequest::get("/admin/technicians")
}

pub fn approve_technician_request(technician_id: &str) -> ApiRequest {
    ApiRequest::put(format!("/admin/technicians/{}/approve", urlencoding::encode(technician_id)))
}

pub fn all_requests_request() -> ApiRequest {
    ApiRequest::get("/admin/requests")
}

pub fn delete_feedback_request(feedback_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/admin/feedback/{}", urlencoding::encode(feedback_id)))
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn fetch_stats(client: &ApiClient) -> Result<AdminStats, ApiError> {
    let body: StatsEnvelope = client.send(stats_request()).await?;
    Ok(body.stats)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn users(client: &ApiClient) -> Result<Vec<Account>, ApiError> {
    let body: UserList = client.send(users_request()).await?;
    Ok(body.users)
}

/// Block or unblock a customer account.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn set_user_blocked(client: &ApiClient, user_id: &str, is_blocked: bool) -> Result<Account, ApiError> {
    let body: UserEnvelope = client.send(set_user_blocked_request(user_id, is_blocked)).await?;
    Ok(body.user)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn technicians(client: &ApiClient) -> Result<Vec<Account>, ApiError> {
    let body: TechnicianList = client.send(technicians_request()).await?;
    Ok(body.technicians)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn approve_technician(client: &ApiClient, technician_id: &str) -> Result<Account, ApiError> {
    let body: UserEnvelope = client.send(approve_technician_request(technician_id)).await?;
    Ok(body.user)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn all_requests(client: &ApiClient) -> Result<Vec<ServiceRequest>, ApiError> {
    let body: RequestList = client.send(all_requests_request()).await?;
    Ok(body.requests)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn delete_feedback(client: &ApiClient, feedback_id: &str) -> Result<(), ApiError> {
    client.send_unit(delete_feedback_request(feedback_id)).await
}
