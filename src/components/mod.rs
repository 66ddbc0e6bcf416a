//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, toasts), request and job
//! presentation, and the modals pages open for estimates and feedback. They
//! read session and toast state from Leptos context providers.

pub mod appliance_picker;
pub mod chat_widget;
pub mod estimate_modal;
pub mod feedback_modal;
pub mod form_field;
pub mod navbar;
pub mod protected_route;
pub mod request_card;
pub mod star_rating;
pub mod status_badge;
pub mod toast_host;
