//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, action handlers,
//! navigation) and delegates rendering details to `components`. Role-gated
//! pages are wrapped in `ProtectedRoute` by the router, not by the page.

pub mod admin_dashboard;
pub mod auth_forms;
pub mod home;
pub mod legal;
pub mod login;
pub mod new_request;
pub mod notifications;
pub mod profile;
pub mod request_detail;
pub mod subscriptions;
pub mod technician_dashboard;
pub mod technician_job;
pub mod user_dashboard;
