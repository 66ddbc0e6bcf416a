//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and formatting logic lives here so it can be tested natively
//! without a browser or a reactive runtime.

pub mod browser;
pub mod format;
pub mod guard;
pub mod login_flow;
pub mod validation;
