//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. Links depend on the signed-in role; the bell
//! shows the unread notification count, polled while a session is active.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::notifications;
use crate::net::types::Role;
use crate::state::auth::use_auth;
use crate::util::browser;

const UNREAD_POLL_MS: u32 = 30_000;

/// Role-specific navigation links as `(href, label)`.
pub fn links_for(role: Option<Role>) -> &'static [(&'static str, &'static str)] {
    match role {
        None => &[("/login", "Log in"), ("/register", "Sign up"), ("/technician/register", "Join as technician")],
        Some(Role::User) => &[
            ("/user/dashboard", "My requests"),
            ("/user/requests/new", "New request"),
            ("/user/subscriptions", "Plans"),
            ("/user/profile", "Profile"),
        ],
        Some(Role::Technician) => &[("/technician/dashboard", "Jobs"), ("/technician/profile", "Profile")],
        Some(Role::Admin) => &[("/admin/dashboard", "Dashboard")],
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let unread = RwSignal::new(0_u32);
    let signed_in = Memo::new(move |_| state.with(|s| s.is_authenticated()));

    // Bumped on every sign-in change and on unmount; a poll loop stops as
    // soon as its generation is stale.
    let generation = Arc::new(AtomicU64::new(0));
    {
        let auth = auth.clone();
        let generation = generation.clone();
        Effect::new(move || {
            let current = generation.fetch_add(1, Ordering::Relaxed) + 1;
            if !signed_in.get() {
                unread.set(0);
                return;
            }
            let api = auth.api();
            let generation = generation.clone();
            browser::spawn(async move {
                while generation.load(Ordering::Relaxed) == current {
                    if let Ok(feed) = notifications::list(&api).await {
                        unread.set(feed.unread);
                    }
                    browser::sleep_ms(UNREAD_POLL_MS).await;
                }
            });
        });
    }
    on_cleanup(move || {
        generation.fetch_add(1, Ordering::Relaxed);
    });

    // Protected routes redirect to the login page on their own once the
    // session is gone.
    let on_logout = move |_| auth.logout();

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"ElectroCare"</A>
            <ul class="navbar__links">
                {move || {
                    links_for(state.with(|s| s.role()))
                        .iter()
                        .map(|(href, label)| view! { <li><A href=*href>{*label}</A></li> })
                        .collect_view()
                }}
            </ul>
            <Show when=move || signed_in.get()>
                <A href="/notifications" attr:class="navbar__bell">
                    "🔔"
                    <Show when=move || { unread.get() > 0 }>
                        <span class="navbar__badge">{move || unread.get()}</span>
                    </Show>
                </A>
                <span class="navbar__user">
                    {move || state.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default())}
                </span>
                <button class="btn navbar__logout" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
