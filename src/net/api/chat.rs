//! Chat history endpoint. Live messages arrive over the push channel.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::Deserialize;

use crate::net::client::{ApiClient, ApiRequest};
use crate::net::error::ApiError;
use crate::net::types::ChatMessage;

#[derive(Debug, Deserialize)]
struct MessageList {
    messages: Vec<ChatMessage>,
}

pub fn history_request(request_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/chat/{}/messages", urlencoding::encode(request_id)))
}

/// Fetch the stored conversation for a service request, oldest first.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call.
pub async fn history(client: &ApiClient, request_id: &str) -> Result<Vec<ChatMessage>, ApiError> {
    let body: MessageList = client.send(history_request(request_id)).await?;
    Ok(body.messages)
}
