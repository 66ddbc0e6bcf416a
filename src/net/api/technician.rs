//! Technician account and job-handling endpoints.

#[cfg(test)]
#[path = "technician_test.rs"]
mod technician_test;

use serde::{Deserialize, Serialize};

use super::service_requests::{RequestEnvelope, RequestList};
use crate::net::client::{ApiClient, ApiRequest, MessageResponse};
use crate::net::error::ApiError;
use crate::net::types::{Account, ServiceRequest, ServiceStatus, TechnicianStats};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTechnician {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub address: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianProfileUpdate {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub skills: Vec<String>,
    pub experience_years: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct AvailabilityUpdate {
    is_available: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
struct StatusUpdate {
    status: ServiceStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub estimated_cost: f64,
    pub note: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub final_cost: f64,
}

#[derive(Debug, Deserialize)]
struct TechnicianEnvelope {
    technician: Account,
}

#[derive(Debug, Deserialize)]
struct StatsEnvelope {
    stats: TechnicianStats,
}

pub fn register_request(payload: &RegisterTechnician) -> ApiRequest {
    ApiRequest::post("/technician/register").json(payload)
}

pub fn update_profile_request(payload: &TechnicianProfileUpdate) -> ApiRequest {
    ApiRequest::put("/technician/profile").json(payload)
}

pub fn availability_request(is_available: bool) -> ApiRequest {
    ApiRequest::put("/technician/availability").json(&AvailabilityUpdate { is_available })
}

pub fn stats_request() -> ApiRequest {
    ApiRequest::get("/technician/stats")
}

pub fn available_jobs_request() -> ApiRequest {
    ApiRequest::get("/technician/requests/available")
}

pub fn my_jobs_request() -> ApiRequest {
    ApiRequest::get("/technician/requests")
}

pub fn accept_job_request(request_id: &str) -> ApiRequest {
    ApiRequest::put(format!("/technician/requests/{}/accept", urlencoding::encode(request_id)))
}

pub fn update_status_request(request_id: &str, status: ServiceStatus) -> ApiRequest {
    ApiRequest::put(format!("/technician/requests/{}/status", urlencoding::encode(request_id))).json(&StatusUpdate { status })
}

pub fn submit_estimate_request(request_id: &str, estimate: &Estimate) -> ApiRequest {
    ApiRequest::put(format!("/technician/requests/{}/estimate", urlencoding::encode(request_id))).json(estimate)
}

pub fn complete_job_request(request_id: &str, completion: Completion) -> ApiRequest {
    ApiRequest::put(format!("/technician/requests/{}/complete", urlencoding::encode(request_id))).json(&completion)
}

/// Register a technician. Accounts stay unapproved until an admin approves.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn register(client: &ApiClient, payload: &RegisterTechnician) -> Result<String, ApiError> {
    let body: MessageResponse = client.send(register_request(payload)).await?;
    Ok(body.message)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn update_profile(client: &ApiClient, payload: &TechnicianProfileUpdate) -> Result<Account, ApiError> {
    let body: TechnicianEnvelope = client.send(update_profile_request(payload)).await?;
    Ok(body.technician)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn set_availability(client: &ApiClient, is_available: bool) -> Result<Account, ApiError> {
    let body: TechnicianEnvelope = client.send(availability_request(is_available)).await?;
    Ok(body.technician)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn fetch_stats(client: &ApiClient) -> Result<TechnicianStats, ApiError> {
    let body: StatsEnvelope = client.send(stats_request()).await?;
    Ok(body.stats)
}

/// Broadcasted requests matching the technician's skills.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn available_jobs(client: &ApiClient) -> Result<Vec<ServiceRequest>, ApiError> {
    let body: RequestList = client.send(available_jobs_request()).await?;
    Ok(body.requests)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn my_jobs(client: &ApiClient) -> Result<Vec<ServiceRequest>, ApiError> {
    let body: RequestList = client.send(my_jobs_request()).await?;
    Ok(body.requests)
}

/// # Errors
///
/// Propagates any [`ApiError`]; a job already taken answers with status 409.
pub async fn accept_job(client: &ApiClient, request_id: &str) -> Result<ServiceRequest, ApiError> {
    let body: RequestEnvelope = client.send(accept_job_request(request_id)).await?;
    Ok(body.request)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn update_status(
    client: &ApiClient,
    request_id: &str,
    status: ServiceStatus,
) -> Result<ServiceRequest, ApiError> {
    let body: RequestEnvelope = client.send(update_status_request(request_id, status)).await?;
    Ok(body.request)
}

/// Submit a cost estimate; the request moves to `awaiting_approval`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn submit_estimate(
    client: &ApiClient,
    request_id: &str,
    estimate: &Estimate,
) -> Result<ServiceRequest, ApiError> {
    let body: RequestEnvelope = client.send(submit_estimate_request(request_id, estimate)).await?;
    Ok(body.request)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn complete_job(
    client: &ApiClient,
    request_id: &str,
    completion: Completion,
) -> Result<ServiceRequest, ApiError> {
    let body: RequestEnvelope = client.send(complete_job_request(request_id, completion)).await?;
    Ok(body.request)
}
