//! Appliance catalogue endpoints.

#[cfg(test)]
#[path = "appliances_test.rs"]
mod appliances_test;

use serde::{Deserialize, Serialize};

use crate::net::client::{ApiClient, ApiRequest};
use crate::net::error::ApiError;
use crate::net::types::Appliance;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppliance {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ApplianceList {
    appliances: Vec<Appliance>,
}

#[derive(Debug, Deserialize)]
struct ApplianceEnvelope {
    appliance: Appliance,
}

pub fn list_request() -> ApiRequest {
    ApiRequest::get("/appliances")
}

pub fn create_request(payload: &NewAppliance) -> ApiRequest {
    ApiRequest::post("/appliances").json(payload)
}

pub fn delete_request(appliance_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("/appliances/{}", urlencoding::encode(appliance_id)))
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn list(client: &ApiClient) -> Result<Vec<Appliance>, ApiError> {
    let body: ApplianceList = client.send(list_request()).await?;
    Ok(body.appliances)
}

/// Admin only.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn create(client: &ApiClient, payload: &NewAppliance) -> Result<Appliance, ApiError> {
    let body: ApplianceEnvelope = client.send(create_request(payload)).await?;
    Ok(body.appliance)
}

/// Admin only.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn delete(client: &ApiClient, appliance_id: &str) -> Result<(), ApiError> {
    client.send_unit(delete_request(appliance_id)).await
}
