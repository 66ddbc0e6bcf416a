//! Customer-side service request endpoints.

#[cfg(test)]
#[path = "service_requests_test.rs"]
mod service_requests_test;

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, ApiRequest};
use crate::net::error::ApiError;
use crate::net::types::ServiceRequest;

/// New repair request submitted from the request form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceRequest {
    pub appliance_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub description: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct CancelReason {
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RequestList {
    pub(crate) requests: Vec<ServiceRequest>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RequestEnvelope {
    pub(crate) request: ServiceRequest,
}

pub fn create_request(payload: &NewServiceRequest) -> ApiRequest {
    ApiRequest::post("/service-requests").json(payload)
}

pub fn my_requests_request() -> ApiRequest {
    ApiRequest::get("/service-requests/my")
}

pub fn detail_request(request_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/service-requests/{}", urlencoding::encode(request_id)))
}

pub fn cancel_request(request_id: &str, reason: Option<&str>) -> ApiRequest {
    let reason = reason.map(str::trim).filter(|r| !r.is_empty()).map(str::to_owned);
    ApiRequest::put(format!("/service-requests/{}/cancel", urlencoding::encode(request_id))).json(&CancelReason { reason })
}

pub fn approve_estimate_request(request_id: &str) -> ApiRequest {
    ApiRequest::put(format!("/service-requests/{}/approve", urlencoding::encode(request_id)))
}

pub fn reject_estimate_request(request_id: &str) -> ApiRequest {
    ApiRequest::put(format!("/service-requests/{}/reject", urlencoding::encode(request_id)))
}

/// Submit a request; the backend broadcasts it to matching technicians.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn create(client: &ApiClient, payload: &NewServiceRequest) -> Result<ServiceRequest, ApiError> {
    let body: RequestEnvelope = client.send(create_request(payload)).await?;
    Ok(body.request)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn my_requests(client: &ApiClient) -> Result<Vec<ServiceRequest>, ApiError> {
    let body: RequestList = client.send(my_requests_request()).await?;
    Ok(body.requests)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn fetch(client: &ApiClient, request_id: &str) -> Result<ServiceRequest, ApiError> {
    let body: RequestEnvelope = client.send(detail_request(request_id)).await?;
    Ok(body.request)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn cancel(client: &ApiClient, request_id: &str, reason: Option<&str>) -> Result<ServiceRequest, ApiError> {
    let body: RequestEnvelope = client.send(cancel_request(request_id, reason)).await?;
    Ok(body.request)
}

/// Accept the technician's estimate; work may start.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn approve_estimate(client: &ApiClient, request_id: &str) -> Result<ServiceRequest, ApiError> {
    let body: RequestEnvelope = client.send(approve_estimate_request(request_id)).await?;
    Ok(body.request)
}

/// Decline the technician's estimate; the request is cancelled.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn reject_estimate(client: &ApiClient, request_id: &str) -> Result<ServiceRequest, ApiError> {
    let body: RequestEnvelope = client.send(reject_estimate_request(request_id)).await?;
    Ok(body.request)
}
