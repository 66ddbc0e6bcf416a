//! Technician view of one assigned job.
//!
//! DESIGN
//! ======
//! The job moves forward one step per action. Plain steps go through the
//! status endpoint (`Accepted -> OnTheWay`, `Approved -> InProgress`); the
//! en-route step is closed by submitting an estimate and the in-progress step
//! by reporting the final cost. Every successful call replaces the shown
//! record with the one the backend returns.

#[cfg(test)]
#[path = "technician_job_test.rs"]
mod technician_job_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::chat_widget::ChatWidget;
use crate::components::estimate_modal::EstimateModal;
use crate::components::form_field::{FormError, FormField};
use crate::components::status_badge::StatusBadge;
use crate::net::api::{service_requests, technician};
use crate::net::types::{ServiceRequest, ServiceStatus};
use crate::state::auth::use_auth;
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;
use crate::util::format;
use crate::util::validation;

/// What the technician can do next with a job in `status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextStep {
    Advance(ServiceStatus),
    SubmitEstimate,
    Complete,
    WaitForCustomer,
    Done,
}

pub fn next_step(status: ServiceStatus) -> NextStep {
    if let Some(next) = status.technician_next() {
        return NextStep::Advance(next);
    }
    match status {
        ServiceStatus::OnTheWay => NextStep::SubmitEstimate,
        ServiceStatus::InProgress => NextStep::Complete,
        ServiceStatus::AwaitingApproval => NextStep::WaitForCustomer,
        _ => NextStep::Done,
    }
}

pub fn advance_label(next: ServiceStatus) -> &'static str {
    match next {
        ServiceStatus::OnTheWay => "Start travelling",
        ServiceStatus::InProgress => "Start work",
        _ => "Update status",
    }
}

#[component]
pub fn TechnicianJobPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let params = use_params_map();
    let job_id = params.with_untracked(|p| p.get("id").unwrap_or_default());

    let job = RwSignal::new(Remote::<ServiceRequest>::Loading);
    let busy = RwSignal::new(false);
    let show_estimate = RwSignal::new(false);
    let final_cost = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    {
        let api = auth.api();
        let job_id = job_id.clone();
        load(job, async move { service_requests::fetch(&api, &job_id).await });
    }

    let advance = {
        let auth = auth.clone();
        let job_id = job_id.clone();
        Callback::new(move |next: ServiceStatus| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let api = auth.api();
            let job_id = job_id.clone();
            browser::spawn(async move {
                match technician::update_status(&api, &job_id, next).await {
                    Ok(updated) => {
                        notify(toasts, ToastKind::Success, format!("Status: {}", next.label()));
                        job.set(Remote::Ready(updated));
                    }
                    Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
                }
                busy.set(false);
            });
        })
    };

    let complete = {
        let job_id = job_id.clone();
        Callback::new(move |()| {
            if busy.get_untracked() {
                return;
            }
            let completion = match validation::completion(&final_cost.get_untracked()) {
                Ok(c) => c,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            error.set(None);
            busy.set(true);
            let api = auth.api();
            let job_id = job_id.clone();
            browser::spawn(async move {
                match technician::complete_job(&api, &job_id, completion).await {
                    Ok(updated) => {
                        notify(toasts, ToastKind::Success, "Job completed");
                        job.set(Remote::Ready(updated));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let on_estimate_close = Callback::new(move |()| show_estimate.set(false));
    let on_estimate_sent = Callback::new(move |updated: ServiceRequest| job.set(Remote::Ready(updated)));
    let chat_open = move || job.with(|j| j.ready().is_some_and(|r| r.status.chat_open()));
    let estimate_room = job_id.clone();
    let chat_room = job_id;

    view! {
        <main class="page technician-job">
            <A href="/technician/dashboard" attr:class="btn btn--link">"Back to dashboard"</A>
            {move || match job.get() {
                Remote::Loading => view! { <p>"Loading job..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(req) => {
                    let step = next_step(req.status);
                    view! {
                        <JobSummary request=req/>
                        <section class="technician-job__actions">
                            {match step {
                                NextStep::Advance(next) => view! {
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || busy.get()
                                        on:click=move |_| advance.run(next)
                                    >
                                        {advance_label(next)}
                                    </button>
                                }
                                .into_any(),
                                NextStep::SubmitEstimate => view! {
                                    <button class="btn btn--primary" on:click=move |_| show_estimate.set(true)>
                                        "Submit estimate"
                                    </button>
                                }
                                .into_any(),
                                NextStep::Complete => view! {
                                    <form
                                        class="technician-job__complete"
                                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                                            ev.prevent_default();
                                            complete.run(());
                                        }
                                    >
                                        <FormField label="Final cost" value=final_cost input_type="number"/>
                                        <FormError error=error/>
                                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                                            "Mark completed"
                                        </button>
                                    </form>
                                }
                                .into_any(),
                                NextStep::WaitForCustomer => {
                                    view! { <p class="page__notice">"Waiting for the customer to approve your estimate."</p> }
                                        .into_any()
                                }
                                NextStep::Done => ().into_any(),
                            }}
                        </section>
                    }
                    .into_any()
                }
            }}
            <Show when=move || show_estimate.get()>
                <EstimateModal
                    request_id=estimate_room.clone()
                    on_close=on_estimate_close
                    on_submitted=on_estimate_sent
                />
            </Show>
            <Show when=chat_open>
                <ChatWidget request_id=chat_room.clone()/>
            </Show>
        </main>
    }
}

#[component]
fn JobSummary(request: ServiceRequest) -> impl IntoView {
    let customer = request.user.clone();
    view! {
        <section class="card technician-job__summary">
            <header class="page__header">
                <h1>{request.appliance_type.clone()}</h1>
                <StatusBadge status=request.status/>
            </header>
            <p>{request.description.clone()}</p>
            <dl>
                <dt>"Address"</dt>
                <dd>{request.address.clone()}</dd>
                <dt>"Preferred date"</dt>
                <dd>{request.preferred_date.as_deref().map_or_else(|| "-".to_owned(), format::date)}</dd>
                <dt>"Estimate"</dt>
                <dd>{format::currency_or_dash(request.estimated_cost)}</dd>
                <dt>"Final cost"</dt>
                <dd>{format::currency_or_dash(request.final_cost)}</dd>
            </dl>
            {customer
                .map(|c| {
                    view! {
                        <div class="technician-job__customer">
                            <h2>"Customer"</h2>
                            <p>{c.name}</p>
                            <p>{c.phone.unwrap_or_default()}</p>
                        </div>
                    }
                })}
        </section>
    }
}
