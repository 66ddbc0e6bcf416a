//! Job feedback endpoints.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, ApiRequest};
use crate::net::error::ApiError;
use crate::net::types::Feedback;

/// Validated feedback ready to submit. Built by
/// [`FeedbackDraft::prepare`](crate::util::validation::FeedbackDraft::prepare),
/// which guarantees a rating in `1..=5`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    pub request_id: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Deserialize)]
struct FeedbackList {
    feedback: Vec<Feedback>,
}

#[derive(Debug, Deserialize)]
struct FeedbackEnvelope {
    feedback: Feedback,
}

pub fn submit_request(payload: &NewFeedback) -> ApiRequest {
    ApiRequest::post("/feedback").json(payload)
}

pub fn for_technician_request(technician_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/feedback/technician/{}", urlencoding::encode(technician_id)))
}

pub fn all_request() -> ApiRequest {
    ApiRequest::get("/feedback")
}

/// # Errors
///
/// Propagates any [`ApiError`]; duplicate feedback answers with status 409.
pub async fn submit(client: &ApiClient, payload: &NewFeedback) -> Result<Feedback, ApiError> {
    let body: FeedbackEnvelope = client.send(submit_request(payload)).await?;
    Ok(body.feedback)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn for_technician(client: &ApiClient, technician_id: &str) -> Result<Vec<Feedback>, ApiError> {
    let body: FeedbackList = client.send(for_technician_request(technician_id)).await?;
    Ok(body.feedback)
}

/// Admin only.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn all(client: &ApiClient) -> Result<Vec<Feedback>, ApiError> {
    let body: FeedbackList = client.send(all_request()).await?;
    Ok(body.feedback)
}
