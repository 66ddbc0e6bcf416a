//! Per-request chat room state.
//!
//! DESIGN
//! ======
//! The room is fed from two sources: the REST history snapshot and pushed
//! `new_message` events. Both funnel through the merge helpers here so a
//! message is shown at most once regardless of arrival order. Messages carry
//! a server id, which is the dedup key.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatMessage;

/// Push-channel connection status as shown in the chat header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChannelStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ChannelStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "offline",
            Self::Connecting => "connecting",
            Self::Connected => "live",
        }
    }
}

/// Messages and connection state of one service-request room.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub request_id: String,
    pub messages: Vec<ChatMessage>,
    pub status: ChannelStatus,
    pub history_loaded: bool,
    pub last_error: Option<String>,
}

impl ChatState {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self { request_id: request_id.into(), ..Self::default() }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.messages.iter().any(|m| m.id == id)
    }

    /// Append a pushed message unless it is already displayed.
    ///
    /// Returns `true` when the message was added.
    pub fn merge_pushed(&mut self, message: ChatMessage) -> bool {
        if self.contains(&message.id) {
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Replace the room with a history snapshot.
    ///
    /// History order wins; pushed messages the snapshot does not yet contain
    /// stay after it in their arrival order. Duplicate ids inside the snapshot
    /// collapse to the first occurrence.
    pub fn merge_history(&mut self, history: Vec<ChatMessage>) {
        let pushed = std::mem::take(&mut self.messages);
        for message in history.into_iter().chain(pushed) {
            self.merge_pushed(message);
        }
        self.history_loaded = true;
    }
}
