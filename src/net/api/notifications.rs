//! In-app notification endpoints.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use serde::Deserialize;

use crate::net::client::{ApiClient, ApiRequest};
use crate::net::error::ApiError;
use crate::net::types::Notification;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationList {
    notifications: Vec<Notification>,
    #[serde(default)]
    unread_count: Option<u32>,
}

/// Notifications plus the server's unread counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationFeed {
    pub items: Vec<Notification>,
    pub unread: u32,
}

impl From<NotificationList> for NotificationFeed {
    fn from(list: NotificationList) -> Self {
        let counted = list.notifications.iter().filter(|n| !n.is_read).count();
        let unread = list
            .unread_count
            .unwrap_or_else(|| u32::try_from(counted).unwrap_or(u32::MAX));
        Self { items: list.notifications, unread }
    }
}

pub fn list_request() -> ApiRequest {
    ApiRequest::get("/notifications")
}

pub fn mark_read_request(notification_id: &str) -> ApiRequest {
    ApiRequest::put(format!("/notifications/{}/read", urlencoding::encode(notification_id)))
}

pub fn mark_all_read_request() -> ApiRequest {
    ApiRequest::put("/notifications/read-all")
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn list(client: &ApiClient) -> Result<NotificationFeed, ApiError> {
    let body: NotificationList = client.send(list_request()).await?;
    Ok(body.into())
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn mark_read(client: &ApiClient, notification_id: &str) -> Result<(), ApiError> {
    client.send_unit(mark_read_request(notification_id)).await
}

/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn mark_all_read(client: &ApiClient) -> Result<(), ApiError> {
    client.send_unit(mark_all_read_request()).await
}
