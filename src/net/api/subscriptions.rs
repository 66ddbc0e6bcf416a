//! Maintenance plan subscription endpoints.

#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, ApiRequest};
use crate::net::error::ApiError;
use crate::net::types::{Subscription, SubscriptionPlan};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeRequest {
    plan_id: String,
}

#[derive(Debug, Deserialize)]
struct PlanList {
    plans: Vec<SubscriptionPlan>,
}

#[derive(Debug, Deserialize)]
struct SubscriptionEnvelope {
    subscription: Option<Subscription>,
}

pub fn plans_request() -> ApiRequest {
    ApiRequest::get("/subscriptions/plans")
}

pub fn mine_request() -> ApiRequest {
    ApiRequest::get("/subscriptions/my")
}

pub fn subscribe_request(plan_id: &str) -> ApiRequest {
    ApiRequest::post("/subscriptions").json(&SubscribeRequest { plan_id: plan_id.to_owned() })
}

pub fn cancel_request() -> ApiRequest {
    ApiRequest::put("/subscriptions/cancel")
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn plans(client: &ApiClient) -> Result<Vec<SubscriptionPlan>, ApiError> {
    let body: PlanList = client.send(plans_request()).await?;
    Ok(body.plans)
}

/// Current subscription; `None` when the user has never subscribed.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn mine(client: &ApiClient) -> Result<Option<Subscription>, ApiError> {
    let body: SubscriptionEnvelope = client.send(mine_request()).await?;
    Ok(body.subscription)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn subscribe(client: &ApiClient, plan_id: &str) -> Result<Option<Subscription>, ApiError> {
    let body: SubscriptionEnvelope = client.send(subscribe_request(plan_id)).await?;
    Ok(body.subscription)
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn cancel(client: &ApiClient) -> Result<Option<Subscription>, ApiError> {
    let body: SubscriptionEnvelope = client.send(cancel_request()).await?;
    Ok(body.subscription)
}
