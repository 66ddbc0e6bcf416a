//! Networking modules for the REST API and the chat push channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` executes HTTP requests, `api` holds one typed wrapper module per
//! backend domain, `chat_socket` manages the push-channel lifecycle, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod chat_socket;
pub mod client;
pub mod error;
pub mod types;
