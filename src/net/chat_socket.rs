//! Push-channel client for service-request chat rooms.
//!
//! A `ChatChannel` owns one websocket to the backend socket server, scoped to
//! a single request id. It authenticates with the session token, joins the
//! room and merges every `new_message` event into the room's `ChatState`.
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment. Packet handling is split into the pure
//! [`RoomSession::handle`] so the protocol steps are testable natively.
//!
//! LIFECYCLE
//! =========
//! open -> engine handshake -> CONNECT {token} -> CONNECT ack -> join_chat
//!      -> new_message* -> disconnect -> backoff -> reconnect (join again)
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures are logged and surface only as the room's
//! connection status. The reconnect loop retries forever until the owning
//! view closes the channel.

#[cfg(test)]
#[path = "chat_socket_test.rs"]
mod chat_socket_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use realtime::{EnginePacket, PacketError, SocketPacket, SocketPacketKind};

use crate::net::api::chat as chat_api;
use crate::net::client::ApiClient;
use crate::net::types::ChatMessage;
use crate::state::chat::{ChannelStatus, ChatState};

pub const JOIN_EVENT: &str = "join_chat";
pub const SEND_EVENT: &str = "send_message";
pub const MESSAGE_EVENT: &str = "new_message";

pub const INITIAL_BACKOFF_MS: u32 = 1000;
pub const MAX_BACKOFF_MS: u32 = 5000;

/// Delay before the next reconnect attempt.
pub fn next_backoff(current_ms: u32) -> u32 {
    current_ms.saturating_mul(2).min(MAX_BACKOFF_MS)
}

/// How one websocket session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// Transport closed or failed; `joined` is set when the room was reached.
    Dropped { joined: bool },
    /// The server refused the connect packet.
    Rejected,
}

/// Whether the loop dials again after a session ends.
///
/// A refused connect is final: the same token would be refused again.
pub fn should_reconnect(end: SessionEnd, alive: bool) -> bool {
    alive && end != SessionEnd::Rejected
}

/// Websocket URL of the socket server for an http(s) base URL.
pub fn socket_endpoint(socket_base: &str) -> String {
    let base = socket_base.trim_end_matches('/');
    let base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_owned()
    };
    format!("{base}/socket.io/?EIO=4&transport=websocket")
}

/// Socket.IO CONNECT frame, with the token as the auth payload when present.
pub fn connect_packet(token: Option<&str>) -> String {
    let auth = token.map(|t| serde_json::json!({ "token": t }));
    realtime::encode_message(&SocketPacket::connect(auth))
}

pub fn join_packet(request_id: &str) -> String {
    realtime::encode_message(&SocketPacket::event(
        JOIN_EVENT,
        vec![serde_json::Value::String(request_id.to_owned())],
    ))
}

/// `send_message` frame for a chat line. Blank input yields `None`.
pub fn send_message_packet(request_id: &str, content: &str) -> Option<String> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    Some(realtime::encode_message(&SocketPacket::event(
        SEND_EVENT,
        vec![serde_json::json!({ "requestId": request_id, "content": content })],
    )))
}

pub fn disconnect_packet() -> String {
    realtime::encode_message(&SocketPacket {
        kind: SocketPacketKind::Disconnect,
        namespace: realtime::DEFAULT_NAMESPACE.to_owned(),
        ack_id: None,
        data: None,
    })
}

/// What an inbound frame means for the room.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelEvent {
    /// Transport handshake done; CONNECT has been queued.
    Handshake,
    /// Namespace connect acknowledged; the room join has been queued.
    Connected,
    Message(ChatMessage),
    /// The server refused the connection (usually a bad token).
    Rejected(String),
    Closed,
    Ignored,
}

/// Result of handling one frame: frames to write back plus the room event.
#[derive(Clone, Debug, PartialEq)]
pub struct Inbound {
    pub replies: Vec<String>,
    pub event: ChannelEvent,
}

impl Inbound {
    fn event(event: ChannelEvent) -> Self {
        Self { replies: Vec::new(), event }
    }

    fn reply(reply: String, event: ChannelEvent) -> Self {
        Self { replies: vec![reply], event }
    }
}

/// Protocol state for one room connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomSession {
    pub token: Option<String>,
    pub request_id: String,
}

impl RoomSession {
    pub fn new(token: Option<String>, request_id: impl Into<String>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()), request_id: request_id.into() }
    }

    /// Interpret one websocket text frame.
    ///
    /// # Errors
    ///
    /// Returns a [`PacketError`] for frames that are not valid Engine.IO or
    /// Socket.IO packets, or a `new_message` payload that is not a message.
    pub fn handle(&self, text: &str) -> Result<Inbound, PacketError> {
        match realtime::decode_engine(text)? {
            EnginePacket::Open(_) => Ok(Inbound::reply(
                connect_packet(self.token.as_deref()),
                ChannelEvent::Handshake,
            )),
            EnginePacket::Ping(data) => Ok(Inbound::reply(
                realtime::encode_engine(&EnginePacket::Pong(data)),
                ChannelEvent::Ignored,
            )),
            EnginePacket::Close => Ok(Inbound::event(ChannelEvent::Closed)),
            EnginePacket::Message(payload) => self.handle_socket(&payload),
            EnginePacket::Pong(_) | EnginePacket::Upgrade | EnginePacket::Noop => {
                Ok(Inbound::event(ChannelEvent::Ignored))
            }
        }
    }

    fn handle_socket(&self, payload: &str) -> Result<Inbound, PacketError> {
        let packet = realtime::decode_socket(payload)?;
        match packet.kind {
            SocketPacketKind::Connect => {
                Ok(Inbound::reply(join_packet(&self.request_id), ChannelEvent::Connected))
            }
            SocketPacketKind::ConnectError => Ok(Inbound::event(ChannelEvent::Rejected(
                packet.connect_error_message().unwrap_or_default(),
            ))),
            SocketPacketKind::Disconnect => Ok(Inbound::event(ChannelEvent::Closed)),
            SocketPacketKind::Event if packet.event_name() == Some(MESSAGE_EVENT) => {
                let raw = packet
                    .event_args()
                    .first()
                    .cloned()
                    .ok_or(PacketError::Shape(MESSAGE_EVENT))?;
                let message: ChatMessage = serde_json::from_value(raw)?;
                Ok(Inbound::event(ChannelEvent::Message(message)))
            }
            SocketPacketKind::Event | SocketPacketKind::Ack => Ok(Inbound::event(ChannelEvent::Ignored)),
        }
    }
}

/// Apply a room event to chat state.
pub fn apply_event(chat: &mut ChatState, event: &ChannelEvent) {
    match event {
        ChannelEvent::Handshake => chat.status = ChannelStatus::Connecting,
        ChannelEvent::Connected => {
            chat.status = ChannelStatus::Connected;
            chat.last_error = None;
        }
        ChannelEvent::Message(message) => {
            chat.merge_pushed(message.clone());
        }
        ChannelEvent::Rejected(reason) => {
            chat.status = ChannelStatus::Disconnected;
            chat.last_error = Some(reason.clone());
        }
        ChannelEvent::Closed => chat.status = ChannelStatus::Disconnected,
        ChannelEvent::Ignored => {}
    }
}

/// Fetch stored history and merge it into the room.
pub async fn load_history(api: ApiClient, chat: RwSignal<ChatState>) {
    let request_id = chat.with_untracked(|c| c.request_id.clone());
    match chat_api::history(&api, &request_id).await {
        Ok(history) => chat.update(|c| c.merge_history(history)),
        Err(e) => {
            leptos::logging::warn!("chat history for {request_id} failed: {e}");
        }
    }
}

/// Handle to a running room connection. Cloning shares the connection.
#[derive(Clone, Debug)]
pub struct ChatChannel {
    room: RoomSession,
    chat: RwSignal<ChatState>,
    alive: Arc<AtomicBool>,
    #[cfg(feature = "hydrate")]
    tx: futures::channel::mpsc::UnboundedSender<String>,
}

impl ChatChannel {
    /// Start the connection loop for `room`, feeding `chat`.
    ///
    /// Outside the browser this returns an inert handle.
    pub fn open(socket_base: &str, room: RoomSession, chat: RwSignal<ChatState>, api: ApiClient) -> Self {
        let alive = Arc::new(AtomicBool::new(true));

        #[cfg(feature = "hydrate")]
        {
            let (tx, rx) = futures::channel::mpsc::unbounded::<String>();
            leptos::task::spawn_local(run_loop(
                socket_endpoint(socket_base),
                room.clone(),
                chat,
                api,
                tx.clone(),
                rx,
                alive.clone(),
            ));
            Self { room, chat, alive, tx }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (socket_base, api);
            Self { room, chat, alive }
        }
    }

    /// Emit a chat line. Returns `false` when the input is blank, the room is
    /// not connected, or the channel is closed.
    pub fn send(&self, content: &str) -> bool {
        if !self.alive.load(Ordering::Relaxed) {
            return false;
        }
        if self.chat.with_untracked(|c| c.status) != ChannelStatus::Connected {
            return false;
        }
        let Some(frame) = send_message_packet(&self.room.request_id, content) else {
            return false;
        };
        #[cfg(feature = "hydrate")]
        {
            self.tx.unbounded_send(frame).is_ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = frame;
            false
        }
    }

    /// Disconnect and stop reconnecting. Idempotent.
    pub fn close(&self) {
        if !self.alive.swap(false, Ordering::Relaxed) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let _ = self.tx.unbounded_send(disconnect_packet());
            self.tx.close_channel();
        }
    }
}

/// Connection loop with reconnect backoff.
#[cfg(feature = "hydrate")]
async fn run_loop(
    url: String,
    room: RoomSession,
    chat: RwSignal<ChatState>,
    api: ApiClient,
    tx: futures::channel::mpsc::UnboundedSender<String>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
    alive: Arc<AtomicBool>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms = INITIAL_BACKOFF_MS;
    let mut connections: u32 = 0;

    while alive.load(Ordering::Relaxed) {
        chat.update(|c| c.status = ChannelStatus::Connecting);

        let end = match connect_and_run(&url, &room, chat, &api, &tx, &rx, &alive, &mut connections).await {
            Ok(end) => end,
            Err(e) => {
                leptos::logging::warn!("chat {} socket error: {e}", room.request_id);
                SessionEnd::Dropped { joined: false }
            }
        };
        if end == (SessionEnd::Dropped { joined: true }) {
            leptos::logging::log!("chat {} disconnected", room.request_id);
            backoff_ms = INITIAL_BACKOFF_MS;
        }

        if !should_reconnect(end, alive.load(Ordering::Relaxed)) {
            break;
        }
        chat.update(|c| c.status = ChannelStatus::Disconnected);

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff(backoff_ms);
    }
    chat.update(|c| c.status = ChannelStatus::Disconnected);
}

/// Run one websocket until it drops or the server refuses the connect.
#[cfg(feature = "hydrate")]
#[allow(clippy::too_many_arguments)]
async fn connect_and_run(
    url: &str,
    room: &RoomSession,
    chat: RwSignal<ChatState>,
    api: &ApiClient,
    tx: &futures::channel::mpsc::UnboundedSender<String>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
    alive: &AtomicBool,
    connections: &mut u32,
) -> Result<SessionEnd, String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();
    let mut joined = false;
    let mut rejected = false;

    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(text) = rx_borrow.next().await {
            if ws_write.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            let text = match msg {
                Ok(Message::Text(text)) => text,
                Ok(Message::Bytes(_)) => continue,
                Err(e) => {
                    leptos::logging::warn!("chat recv error: {e}");
                    break;
                }
            };
            let inbound = match room.handle(&text) {
                Ok(inbound) => inbound,
                Err(e) => {
                    leptos::logging::warn!("chat packet skipped: {e}");
                    continue;
                }
            };
            for reply in inbound.replies {
                let _ = tx.unbounded_send(reply);
            }
            if inbound.event == ChannelEvent::Connected {
                joined = true;
                *connections += 1;
                // The first history load belongs to the widget mount.
                if *connections > 1 {
                    leptos::task::spawn_local(load_history(api.clone(), chat));
                }
            }
            let closed = matches!(inbound.event, ChannelEvent::Closed | ChannelEvent::Rejected(_));
            if let ChannelEvent::Rejected(reason) = &inbound.event {
                leptos::logging::warn!("chat connection rejected: {reason}");
                rejected = true;
            }
            chat.update(|c| apply_event(c, &inbound.event));
            if closed {
                break;
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    if rejected {
        return Ok(SessionEnd::Rejected);
    }
    Ok(SessionEnd::Dropped { joined })
}
