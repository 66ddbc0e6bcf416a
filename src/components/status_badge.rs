use leptos::prelude::*;

use crate::net::types::ServiceStatus;

/// Coloured pill showing a request's status.
#[component]
pub fn StatusBadge(status: ServiceStatus) -> impl IntoView {
    let class = format!("status-badge status-badge--{}", status.as_str());
    view! { <span class=class>{status.label()}</span> }
}
