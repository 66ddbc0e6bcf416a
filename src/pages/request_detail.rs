//! Customer view of one service request.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the request lifecycle and the actions the customer owns at each
//! step: cancel before the technician leaves, approve or reject the estimate,
//! and rate the job once completed. The chat widget is mounted while a
//! technician is assigned and the job is open.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_widget::ChatWidget;
use crate::components::feedback_modal::FeedbackModal;
use crate::components::status_badge::StatusBadge;
use crate::net::api::service_requests;
use crate::net::error::ApiError;
use crate::net::types::{ServiceRequest, ServiceStatus};
use crate::state::auth::use_auth;
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;
use crate::util::format;

/// Customer action on a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Cancel,
    Approve,
    Reject,
}

impl Action {
    fn done_message(self) -> &'static str {
        match self {
            Self::Cancel => "Request cancelled",
            Self::Approve => "Estimate approved. The technician will start work.",
            Self::Reject => "Estimate rejected",
        }
    }
}

#[component]
pub fn RequestDetailPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let params = use_params_map();
    let request_id = params.with_untracked(|p| p.get("id").unwrap_or_default());

    let request = RwSignal::new(Remote::<ServiceRequest>::Loading);
    let busy = RwSignal::new(false);
    let show_feedback = RwSignal::new(false);
    let feedback_sent = RwSignal::new(false);

    let reload = {
        let auth = auth.clone();
        let request_id = request_id.clone();
        move || {
            let api = auth.api();
            let request_id = request_id.clone();
            load(request, async move { service_requests::fetch(&api, &request_id).await });
        }
    };
    reload();

    let run_action = {
        let request_id = request_id.clone();
        Callback::new(move |action: Action| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let api = auth.api();
            let request_id = request_id.clone();
            browser::spawn(async move {
                let result: Result<ServiceRequest, ApiError> = match action {
                    Action::Cancel => service_requests::cancel(&api, &request_id, None).await,
                    Action::Approve => service_requests::approve_estimate(&api, &request_id).await,
                    Action::Reject => service_requests::reject_estimate(&api, &request_id).await,
                };
                match result {
                    Ok(updated) => {
                        notify(toasts, ToastKind::Success, action.done_message());
                        request.set(Remote::Ready(updated));
                    }
                    Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
                }
                busy.set(false);
            });
        })
    };

    let status = move || request.with(|r| r.ready().map(|req| req.status));
    let chat_open = move || status().is_some_and(ServiceStatus::chat_open);
    let chat_room = request_id.clone();
    let feedback_room = request_id;
    let on_feedback_close = Callback::new(move |()| show_feedback.set(false));
    let on_feedback_sent = Callback::new(move |()| feedback_sent.set(true));

    view! {
        <main class="page request-detail">
            {move || match request.get() {
                Remote::Loading => view! { <p>"Loading request..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(req) => view! { <RequestSummary request=req busy=busy on_action=run_action/> }.into_any(),
            }}
            <Show when=move || status() == Some(ServiceStatus::Completed) && !feedback_sent.get()>
                <button class="btn btn--primary" on:click=move |_| show_feedback.set(true)>
                    "Rate this service"
                </button>
            </Show>
            <Show when=move || show_feedback.get()>
                <FeedbackModal
                    request_id=feedback_room.clone()
                    on_close=on_feedback_close
                    on_submitted=on_feedback_sent
                />
            </Show>
            <Show when=chat_open>
                <ChatWidget request_id=chat_room.clone()/>
            </Show>
            <button class="btn btn--link" on:click=move |_| reload()>
                "Refresh"
            </button>
        </main>
    }
}

#[component]
fn RequestSummary(request: ServiceRequest, busy: RwSignal<bool>, on_action: Callback<Action>) -> impl IntoView {
    let status = request.status;
    let technician = request.technician.clone();
    let estimate = request.estimated_cost;
    let note = request.estimate_note.clone().unwrap_or_default();

    view! {
        <section class="request-detail__summary">
            <header class="page__header">
                <h1>{request.appliance_type.clone()}</h1>
                <StatusBadge status=status/>
            </header>
            <p>{request.description.clone()}</p>
            <dl class="request-detail__facts">
                <dt>"Brand"</dt>
                <dd>{request.brand.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                <dt>"Address"</dt>
                <dd>{request.address.clone()}</dd>
                <dt>"Preferred date"</dt>
                <dd>{request.preferred_date.as_deref().map_or_else(|| "-".to_owned(), format::date)}</dd>
                <dt>"Final cost"</dt>
                <dd>{format::currency_or_dash(request.final_cost)}</dd>
            </dl>
            {technician
                .map(|t| {
                    view! {
                        <div class="request-detail__technician">
                            <h2>"Your technician"</h2>
                            <p>{t.name}</p>
                            <p>{t.phone.unwrap_or_default()}</p>
                            <p>"Rating: " {format::rating(t.rating)}</p>
                        </div>
                    }
                })}
            {(status == ServiceStatus::AwaitingApproval)
                .then(|| {
                    view! {
                        <div class="request-detail__estimate">
                            <h2>"Estimate: " {format::currency_or_dash(estimate)}</h2>
                            <p>{note}</p>
                            <button
                                class="btn btn--primary"
                                disabled=move || busy.get()
                                on:click=move |_| on_action.run(Action::Approve)
                            >
                                "Approve"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || busy.get()
                                on:click=move |_| on_action.run(Action::Reject)
                            >
                                "Reject"
                            </button>
                        </div>
                    }
                })}
            {status
                .user_can_cancel()
                .then(|| {
                    view! {
                        <button
                            class="btn btn--danger"
                            disabled=move || busy.get()
                            on:click=move |_| on_action.run(Action::Cancel)
                        >
                            "Cancel request"
                        </button>
                    }
                })}
        </section>
    }
}
