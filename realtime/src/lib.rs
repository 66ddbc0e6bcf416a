//! Push-channel packet model and text codec.
//!
//! The chat push channel speaks Socket.IO (protocol v5) layered over the
//! Engine.IO (protocol v4) websocket transport. Every websocket text frame is
//! one Engine.IO packet; Engine.IO `message` packets carry one Socket.IO
//! packet as their payload.
//!
//! ```text
//! websocket text  "42[\"new_message\",{...}]"
//!                  |└─ socket.io packet: type 2 (EVENT), payload ["new_message",{...}]
//!                  └── engine.io packet: type 4 (MESSAGE)
//! ```
//!
//! Binary attachments are not part of the chat protocol and are rejected.


use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Namespace used when a packet does not name one.
pub const DEFAULT_NAMESPACE: &str = "/";

/// Error returned by [`decode_engine`] and [`decode_socket`].
#[derive(Debug, thiserror::Error)]
pub enum PacketError {
    /// The websocket frame carried no packet type.
    #[error("empty packet")]
    Empty,
    /// The leading type character is not a known packet type.
    #[error("unknown {layer} packet type: {kind:?}")]
    UnknownType { layer: &'static str, kind: char },
    /// The JSON payload could not be parsed.
    #[error("malformed packet payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// The payload parsed but does not have the shape the packet type requires.
    #[error("invalid {0} payload")]
    Shape(&'static str),
    /// Binary event/ack packets are not supported by this client.
    #[error("binary packets are not supported")]
    BinaryUnsupported,
}

/// Session parameters sent by the server in the Engine.IO `open` packet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    pub sid: String,
    #[serde(default)]
    pub upgrades: Vec<String>,
    /// Milliseconds between server pings.
    pub ping_interval: u64,
    /// Milliseconds the server waits for a pong before closing.
    pub ping_timeout: u64,
    #[serde(default)]
    pub max_payload: Option<u64>,
}

/// A transport-level Engine.IO packet.
#[derive(Clone, Debug, PartialEq)]
pub enum EnginePacket {
    Open(Handshake),
    Close,
    Ping(String),
    Pong(String),
    /// Carries an encoded Socket.IO packet.
    Message(String),
    Upgrade,
    Noop,
}

impl EnginePacket {
    fn type_char(&self) -> char {
        match self {
            Self::Open(_) => '0',
            Self::Close => '1',
            Self::Ping(_) => '2',
            Self::Pong(_) => '3',
            Self::Message(_) => '4',
            Self::Upgrade => '5',
            Self::Noop => '6',
        }
    }
}

/// Socket.IO packet types. Binary variants are recognised only to be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocketPacketKind {
    Connect,
    Disconnect,
    Event,
    Ack,
    ConnectError,
}

impl SocketPacketKind {
    fn as_char(self) -> char {
        match self {
            Self::Connect => '0',
            Self::Disconnect => '1',
            Self::Event => '2',
            Self::Ack => '3',
            Self::ConnectError => '4',
        }
    }

    fn from_char(c: char) -> Result<Self, PacketError> {
        match c {
            '0' => Ok(Self::Connect),
            '1' => Ok(Self::Disconnect),
            '2' => Ok(Self::Event),
            '3' => Ok(Self::Ack),
            '4' => Ok(Self::ConnectError),
            '5' | '6' => Err(PacketError::BinaryUnsupported),
            other => Err(PacketError::UnknownType { layer: "socket.io", kind: other }),
        }
    }
}

/// An application-level Socket.IO packet.
#[derive(Clone, Debug, PartialEq)]
pub struct SocketPacket {
    pub kind: SocketPacketKind,
    pub namespace: String,
    pub ack_id: Option<u64>,
    pub data: Option<Value>,
}

impl SocketPacket {
    /// CONNECT to the default namespace, optionally carrying an auth payload.
    #[must_use]
    pub fn connect(auth: Option<Value>) -> Self {
        Self {
            kind: SocketPacketKind::Connect,
            namespace: DEFAULT_NAMESPACE.to_owned(),
            ack_id: None,
            data: auth,
        }
    }

    /// EVENT on the default namespace: `[name, ...args]`.
    #[must_use]
    pub fn event(name: &str, args: Vec<Value>) -> Self {
        let mut items = Vec::with_capacity(args.len() + 1);
        items.push(Value::String(name.to_owned()));
        items.extend(args);
        Self {
            kind: SocketPacketKind::Event,
            namespace: DEFAULT_NAMESPACE.to_owned(),
            ack_id: None,
            data: Some(Value::Array(items)),
        }
    }

    /// Event name for EVENT packets.
    #[must_use]
    pub fn event_name(&self) -> Option<&str> {
        if self.kind != SocketPacketKind::Event {
            return None;
        }
        self.data.as_ref()?.as_array()?.first()?.as_str()
    }

    /// Event arguments (everything after the name) for EVENT packets.
    #[must_use]
    pub fn event_args(&self) -> &[Value] {
        if self.kind != SocketPacketKind::Event {
            return &[];
        }
        match self.data.as_ref().and_then(Value::as_array) {
            Some(items) if !items.is_empty() => &items[1..],
            _ => &[],
        }
    }

    /// Human-readable reason for CONNECT_ERROR packets.
    ///
    /// Servers send either `{"message": "..."}` or a bare string.
    #[must_use]
    pub fn connect_error_message(&self) -> Option<String> {
        if self.kind != SocketPacketKind::ConnectError {
            return None;
        }
        match self.data.as_ref() {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Object(map)) => map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .or_else(|| Some(Value::Object(map.clone()).to_string())),
            Some(other) => Some(other.to_string()),
            None => Some("connection refused".to_owned()),
        }
    }
}

/// Encode an Engine.IO packet into websocket text.
#[must_use]
pub fn encode_engine(packet: &EnginePacket) -> String {
    let mut out = String::new();
    out.push(packet.type_char());
    match packet {
        EnginePacket::Open(handshake) => {
            out.push_str(&serde_json::to_string(handshake).unwrap_or_default());
        }
        EnginePacket::Ping(data) | EnginePacket::Pong(data) | EnginePacket::Message(data) => {
            out.push_str(data);
        }
        EnginePacket::Close | EnginePacket::Upgrade | EnginePacket::Noop => {}
    }
    out
}

/// Decode websocket text into an Engine.IO packet.
///
/// # Errors
///
/// Returns [`PacketError::Empty`] for empty frames, [`PacketError::UnknownType`]
/// for unknown type characters and [`PacketError::Payload`] when the `open`
/// handshake is not valid JSON.
pub fn decode_engine(text: &str) -> Result<EnginePacket, PacketError> {
    let mut chars = text.chars();
    let kind = chars.next().ok_or(PacketError::Empty)?;
    let rest = chars.as_str();
    match kind {
        '0' => Ok(EnginePacket::Open(serde_json::from_str(rest)?)),
        '1' => Ok(EnginePacket::Close),
        '2' => Ok(EnginePacket::Ping(rest.to_owned())),
        '3' => Ok(EnginePacket::Pong(rest.to_owned())),
        '4' => Ok(EnginePacket::Message(rest.to_owned())),
        '5' => Ok(EnginePacket::Upgrade),
        '6' => Ok(EnginePacket::Noop),
        other => Err(PacketError::UnknownType { layer: "engine.io", kind: other }),
    }
}

/// Encode a Socket.IO packet (without the Engine.IO envelope).
#[must_use]
pub fn encode_socket(packet: &SocketPacket) -> String {
    let mut out = String::new();
    out.push(packet.kind.as_char());
    if packet.namespace != DEFAULT_NAMESPACE && !packet.namespace.is_empty() {
        out.push_str(&packet.namespace);
        out.push(',');
    }
    if let Some(id) = packet.ack_id {
        out.push_str(&id.to_string());
    }
    if let Some(data) = &packet.data {
        out.push_str(&data.to_string());
    }
    out
}

/// Decode a Socket.IO packet from an Engine.IO message payload.
///
/// # Errors
///
/// Returns [`PacketError::BinaryUnsupported`] for binary packets,
/// [`PacketError::Payload`] for malformed JSON and [`PacketError::Shape`] when
/// an EVENT/ACK payload is not an array or a CONNECT payload is not an object.
pub fn decode_socket(text: &str) -> Result<SocketPacket, PacketError> {
    let kind_char = text.chars().next().ok_or(PacketError::Empty)?;
    let kind = SocketPacketKind::from_char(kind_char)?;
    let mut cursor = kind_char.len_utf8();

    let mut namespace = DEFAULT_NAMESPACE.to_owned();
    if text[cursor..].starts_with('/') {
        let rest = &text[cursor..];
        let end = rest.find(',').unwrap_or(rest.len());
        namespace = rest[..end].to_owned();
        cursor += end;
        if text[cursor..].starts_with(',') {
            cursor += 1;
        }
    }

    let digits = text[cursor..]
        .chars()
        .take_while(char::is_ascii_digit)
        .count();
    let ack_id = if digits > 0 {
        let id = text[cursor..cursor + digits].parse::<u64>().ok();
        cursor += digits;
        id
    } else {
        None
    };

    let payload = &text[cursor..];
    let data = if payload.is_empty() {
        None
    } else {
        Some(serde_json::from_str::<Value>(payload)?)
    };

    match (kind, &data) {
        (SocketPacketKind::Event | SocketPacketKind::Ack, Some(Value::Array(_))) => {}
        (SocketPacketKind::Event, _) => return Err(PacketError::Shape("event")),
        (SocketPacketKind::Ack, _) => return Err(PacketError::Shape("ack")),
        (SocketPacketKind::Connect, Some(value)) if !value.is_object() => {
            return Err(PacketError::Shape("connect"));
        }
        _ => {}
    }

    Ok(SocketPacket { kind, namespace, ack_id, data })
}

/// Wrap a Socket.IO packet in an Engine.IO message, ready for the websocket.
#[must_use]
pub fn encode_message(packet: &SocketPacket) -> String {
    encode_engine(&EnginePacket::Message(encode_socket(packet)))
}
