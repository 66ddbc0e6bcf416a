//! Technician dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing page for technicians: job counters, the availability switch, the
//! open jobs broadcast to technicians and the technician's own assigned jobs.
//! Accepting a job moves it from the first list into the second.

#[cfg(test)]
#[path = "technician_dashboard_test.rs"]
mod technician_dashboard_test;

use leptos::prelude::*;

use crate::components::request_card::RequestCard;
use crate::net::api::technician;
use crate::net::types::{Account, ServiceRequest, TechnicianStats};
use crate::state::auth::use_auth;
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;
use crate::util::format;

/// Open jobs are hidden until an admin has approved the technician.
pub fn can_take_jobs(account: Option<&Account>) -> bool {
    account.is_some_and(|a| a.is_approved.unwrap_or(false))
}

/// Assigned jobs split into (active, finished).
pub fn partition_jobs(jobs: Vec<ServiceRequest>) -> (Vec<ServiceRequest>, Vec<ServiceRequest>) {
    jobs.into_iter().partition(|j| !j.status.is_terminal())
}

#[component]
pub fn TechnicianDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let stats = RwSignal::new(Remote::<TechnicianStats>::Loading);
    let open_jobs = RwSignal::new(Remote::<Vec<ServiceRequest>>::Loading);
    let my_jobs = RwSignal::new(Remote::<Vec<ServiceRequest>>::Loading);
    let toggling = RwSignal::new(false);
    let approved = auth.state.with_untracked(|s| can_take_jobs(s.user()));

    let reload = {
        let auth = auth.clone();
        move || {
            let api = auth.api();
            load(stats, async move { technician::fetch_stats(&api).await });
            let api = auth.api();
            load(my_jobs, async move { technician::my_jobs(&api).await });
            if approved {
                let api = auth.api();
                load(open_jobs, async move { technician::available_jobs(&api).await });
            }
        }
    };
    reload();

    let state = auth.state;
    let available = move || state.with(|s| s.user().and_then(|u| u.is_available).unwrap_or(false));

    let on_toggle = {
        let auth = auth.clone();
        move |_| {
            if toggling.get_untracked() {
                return;
            }
            toggling.set(true);
            let next = !auth.state.with_untracked(|s| s.user().and_then(|u| u.is_available).unwrap_or(false));
            let auth = auth.clone();
            browser::spawn(async move {
                match technician::set_availability(&auth.api(), next).await {
                    Ok(_) => {
                        let _ = auth.refresh_profile().await;
                        let label = if next { "You are now available" } else { "You are now offline" };
                        notify(toasts, ToastKind::Info, label);
                    }
                    Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
                }
                toggling.set(false);
            });
        }
    };

    let on_accept = Callback::new(move |id: String| {
        let api = auth.api();
        let reload = reload.clone();
        browser::spawn(async move {
            match technician::accept_job(&api, &id).await {
                Ok(_) => {
                    notify(toasts, ToastKind::Success, "Job accepted");
                    reload();
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    });

    view! {
        <main class="page dashboard technician-dashboard">
            <header class="page__header">
                <h1>"Technician dashboard"</h1>
                <button
                    class="btn"
                    class:btn--primary=available
                    disabled=move || toggling.get() || !approved
                    on:click=on_toggle
                >
                    {move || if available() { "Available" } else { "Offline" }}
                </button>
            </header>
            {(!approved)
                .then(|| {
                    view! {
                        <p class="page__notice">
                            "Your profile is awaiting admin approval. Open jobs appear once approved."
                        </p>
                    }
                })}
            {move || match stats.get() {
                Remote::Ready(s) => view! {
                    <section class="stat-grid">
                        <div class="stat"><span>"Total jobs"</span><strong>{s.total_jobs}</strong></div>
                        <div class="stat"><span>"Active"</span><strong>{s.active_jobs}</strong></div>
                        <div class="stat"><span>"Completed"</span><strong>{s.completed_jobs}</strong></div>
                        <div class="stat"><span>"Earnings"</span><strong>{format::currency(s.earnings)}</strong></div>
                        <div class="stat"><span>"Rating"</span><strong>{format::rating(s.rating)}</strong></div>
                    </section>
                }
                .into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Loading => ().into_any(),
            }}
            {approved
                .then(|| {
                    view! {
                        <section>
                            <h2>"Open jobs"</h2>
                            {move || match open_jobs.get() {
                                Remote::Loading => view! { <p>"Loading jobs..."</p> }.into_any(),
                                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                                Remote::Ready(list) if list.is_empty() => {
                                    view! { <p class="page__empty">"No open jobs right now."</p> }.into_any()
                                }
                                Remote::Ready(list) => view! {
                                    <div class="request-grid">
                                        {list
                                            .into_iter()
                                            .map(|job| {
                                                let id = job.id.clone();
                                                view! {
                                                    <RequestCard request=job>
                                                        <button
                                                            class="btn btn--primary"
                                                            on:click=move |_| on_accept.run(id.clone())
                                                        >
                                                            "Accept"
                                                        </button>
                                                    </RequestCard>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                .into_any(),
                            }}
                        </section>
                    }
                })}
            <section>
                <h2>"My jobs"</h2>
                {move || match my_jobs.get() {
                    Remote::Loading => view! { <p>"Loading jobs..."</p> }.into_any(),
                    Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                    Remote::Ready(list) if list.is_empty() => {
                        view! { <p class="page__empty">"You have not accepted any jobs yet."</p> }.into_any()
                    }
                    Remote::Ready(list) => {
                        let (active, finished) = partition_jobs(list);
                        view! {
                            <div class="request-grid">
                                {active.into_iter().map(job_card).collect_view()}
                            </div>
                            <details class="dashboard__history">
                                <summary>{format!("Finished jobs ({})", finished.len())}</summary>
                                <div class="request-grid">
                                    {finished.into_iter().map(job_card).collect_view()}
                                </div>
                            </details>
                        }
                        .into_any()
                    }
                }}
            </section>
        </main>
    }
}

fn job_card(job: ServiceRequest) -> impl IntoView {
    let href = format!("/technician/jobs/{}", job.id);
    view! { <RequestCard request=job href=href/> }
}
