//! Typed REST wrappers, one module per backend domain.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each wrapper is a direct pass-through to one endpoint: a pure `*_request`
//! builder fixes method, path and body, and an async function sends it with
//! the caller's [`ApiClient`](super::client::ApiClient). No retries, caching
//! or request coalescing happen here.

pub mod admin;
pub mod appliances;
pub mod auth;
pub mod chat;
pub mod feedback;
pub mod notifications;
pub mod service_requests;
pub mod subscriptions;
pub mod technician;
