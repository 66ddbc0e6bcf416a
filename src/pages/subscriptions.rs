//! Maintenance plans: the catalogue and the caller's current membership.

use leptos::prelude::*;

use crate::net::api::subscriptions;
use crate::net::error::ApiError;
use crate::net::types::{Subscription, SubscriptionPlan, SubscriptionStatus};
use crate::state::auth::use_auth;
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;
use crate::util::format;

#[component]
pub fn SubscriptionsPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let plans = RwSignal::new(Remote::<Vec<SubscriptionPlan>>::Loading);
    let mine = RwSignal::new(Remote::<Option<Subscription>>::Loading);
    let busy = RwSignal::new(false);

    {
        let api = auth.api();
        load(plans, async move { subscriptions::plans(&api).await });
        let api = auth.api();
        load(mine, async move { subscriptions::mine(&api).await });
    }

    let active_plan = move || {
        mine.with(|m| {
            m.ready()
                .and_then(Option::as_ref)
                .filter(|s| s.status == SubscriptionStatus::Active)
                .map(|s| s.plan.id.clone())
        })
    };

    let run = move |call: PlanCall| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let api = auth.api();
        browser::spawn(async move {
            let result: Result<Option<Subscription>, ApiError> = match &call {
                PlanCall::Subscribe(plan_id) => subscriptions::subscribe(&api, plan_id).await,
                PlanCall::Cancel => subscriptions::cancel(&api).await,
            };
            match result {
                Ok(sub) => {
                    let message = match call {
                        PlanCall::Subscribe(_) => "Subscription activated",
                        PlanCall::Cancel => "Subscription cancelled",
                    };
                    notify(toasts, ToastKind::Success, message);
                    mine.set(Remote::Ready(sub));
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
            busy.set(false);
        });
    };
    let run = Callback::new(run);

    view! {
        <main class="page subscriptions">
            <header class="page__header">
                <h1>"Maintenance plans"</h1>
            </header>
            {move || match mine.get() {
                Remote::Ready(Some(sub)) if sub.status == SubscriptionStatus::Active => view! {
                    <section class="card subscriptions__current">
                        <h2>"Current plan: " {sub.plan.name.clone()}</h2>
                        <p>
                            "Valid until "
                            {sub.end_date.as_deref().map_or_else(|| "-".to_owned(), format::date)}
                        </p>
                        <button
                            class="btn btn--danger"
                            disabled=move || busy.get()
                            on:click=move |_| run.run(PlanCall::Cancel)
                        >
                            "Cancel plan"
                        </button>
                    </section>
                }
                .into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                _ => ().into_any(),
            }}
            {move || match plans.get() {
                Remote::Loading => view! { <p>"Loading plans..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(list) => {
                    let current = active_plan();
                    view! {
                        <div class="plan-grid">
                            {list
                                .into_iter()
                                .map(|plan| {
                                    let is_current = current.as_deref() == Some(plan.id.as_str());
                                    view! { <PlanCard plan=plan is_current=is_current busy=busy on_subscribe=run/> }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </main>
    }
}

#[derive(Clone, Debug)]
enum PlanCall {
    Subscribe(String),
    Cancel,
}

#[component]
fn PlanCard(plan: SubscriptionPlan, is_current: bool, busy: RwSignal<bool>, on_subscribe: Callback<PlanCall>) -> impl IntoView {
    let plan_id = plan.id.clone();
    view! {
        <article class="card plan-card" class:plan-card--current=is_current>
            <h3>{plan.name}</h3>
            <p class="plan-card__price">{format::currency(plan.price)} " / " {plan.duration_days} " days"</p>
            {plan.discount_percent.map(|d| view! { <p class="plan-card__discount">{format!("{d:.0}% off repairs")}</p> })}
            <ul>{plan.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}</ul>
            <button
                class="btn btn--primary"
                disabled=move || is_current || busy.get()
                on:click=move |_| on_subscribe.run(PlanCall::Subscribe(plan_id.clone()))
            >
                {if is_current { "Current plan" } else { "Subscribe" }}
            </button>
        </article>
    }
}
