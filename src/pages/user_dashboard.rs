//! Customer dashboard: the caller's service requests.

#[cfg(test)]
#[path = "user_dashboard_test.rs"]
mod user_dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::request_card::RequestCard;
use crate::net::api::service_requests;
use crate::net::error::ApiError;
use crate::net::types::ServiceRequest;
use crate::state::auth::use_auth;
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;

/// Active requests first, newest first within each group.
pub fn sort_requests(requests: &mut [ServiceRequest]) {
    requests.sort_by(|a, b| {
        a.status
            .is_terminal()
            .cmp(&b.status.is_terminal())
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let requests = RwSignal::new(Remote::<Vec<ServiceRequest>>::Loading);

    let reload = {
        let auth = auth.clone();
        move || {
            let api = auth.api();
            load(requests, async move {
                let mut list = service_requests::my_requests(&api).await?;
                sort_requests(&mut list);
                Ok::<_, ApiError>(list)
            });
        }
    };
    reload();

    let on_cancel = Callback::new(move |id: String| {
        let api = auth.api();
        let reload = reload.clone();
        browser::spawn(async move {
            match service_requests::cancel(&api, &id, None).await {
                Ok(_) => {
                    notify(toasts, ToastKind::Info, "Request cancelled");
                    reload();
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    });

    view! {
        <main class="page dashboard">
            <header class="page__header">
                <h1>"My service requests"</h1>
                <A href="/user/requests/new" attr:class="btn btn--primary">"New request"</A>
            </header>
            {move || match requests.get() {
                Remote::Loading => view! { <p>"Loading requests..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(list) if list.is_empty() => {
                    view! { <p class="page__empty">"No requests yet. Book your first repair."</p> }.into_any()
                }
                Remote::Ready(list) => view! {
                    <div class="request-grid">
                        {list
                            .into_iter()
                            .map(|req| {
                                let id = req.id.clone();
                                let can_cancel = req.status.user_can_cancel();
                                view! {
                                    <RequestCard request=req href=format!("/user/requests/{id}")>
                                        {can_cancel
                                            .then(|| {
                                                let id = id.clone();
                                                view! {
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_cancel.run(id.clone())
                                                    >
                                                        "Cancel"
                                                    </button>
                                                }
                                            })}
                                    </RequestCard>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </main>
    }
}
