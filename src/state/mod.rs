//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `chat`, `toast`, `remote`) so pages and
//! components depend on small focused models. Durable session persistence
//! lives in `session` behind an injectable storage trait.

pub mod auth;
pub mod chat;
pub mod remote;
pub mod session;
pub mod toast;
