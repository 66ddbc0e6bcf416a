//! Notification inbox shared by every role.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::notifications::{self, NotificationFeed};
use crate::net::types::Notification;
use crate::state::auth::use_auth;
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;
use crate::util::format;

/// Mark one entry read locally and keep the unread counter in step.
pub fn mark_local(feed: &mut NotificationFeed, id: &str) {
    if let Some(n) = feed.items.iter_mut().find(|n| n.id == id && !n.is_read) {
        n.is_read = true;
        feed.unread = feed.unread.saturating_sub(1);
    }
}

pub fn mark_all_local(feed: &mut NotificationFeed) {
    for n in &mut feed.items {
        n.is_read = true;
    }
    feed.unread = 0;
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let feed = RwSignal::new(Remote::<NotificationFeed>::Loading);

    let api = auth.api();
    load(feed, async move { notifications::list(&api).await });

    let mark_one = {
        let auth = auth.clone();
        Callback::new(move |id: String| {
            let api = auth.api();
            browser::spawn(async move {
                match notifications::mark_read(&api, &id).await {
                    Ok(()) => feed.update(|f| f.update_ready(|f| mark_local(f, &id))),
                    Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
                }
            });
        })
    };

    let on_mark_all = move |_| {
        let api = auth.api();
        browser::spawn(async move {
            match notifications::mark_all_read(&api).await {
                Ok(()) => feed.update(|f| f.update_ready(mark_all_local)),
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    };

    let unread = move || feed.with(|f| f.ready().map_or(0, |f| f.unread));

    view! {
        <main class="page notifications">
            <header class="page__header">
                <h1>"Notifications"</h1>
                <button class="btn" disabled=move || unread() == 0 on:click=on_mark_all>
                    "Mark all read"
                </button>
            </header>
            {move || match feed.get() {
                Remote::Loading => view! { <p>"Loading notifications..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(f) if f.items.is_empty() => {
                    view! { <p class="page__empty">"You are all caught up."</p> }.into_any()
                }
                Remote::Ready(f) => view! {
                    <ul class="notification-list">
                        {f.items.into_iter().map(|n| view! { <NotificationRow item=n on_read=mark_one/> }).collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </main>
    }
}

#[component]
fn NotificationRow(item: Notification, on_read: Callback<String>) -> impl IntoView {
    let id = item.id.clone();
    let unread = !item.is_read;
    let when = item.created_at.as_deref().map(format::date).unwrap_or_default();
    let title = match item.link {
        Some(link) => view! { <A href=link>{item.title}</A> }.into_any(),
        None => view! { <span>{item.title}</span> }.into_any(),
    };
    view! {
        <li class="notification" class:notification--unread=unread>
            <h3 class="notification__title">{title}</h3>
            <p>{item.message}</p>
            <footer>
                <time>{when}</time>
                {unread
                    .then(|| {
                        view! {
                            <button class="btn btn--link" on:click=move |_| on_read.run(id.clone())>
                                "Mark read"
                            </button>
                        }
                    })}
            </footer>
        </li>
    }
}
