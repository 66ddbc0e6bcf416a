//! Admin dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page with a tab per moderation area: platform counters, customer
//! accounts (block/unblock), technician approval, every service request,
//! feedback moderation and the appliance catalogue used by the request form.
//! Each tab loads its list when first opened and patches it in place after
//! an action succeeds.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::form_field::{FormError, FormField};
use crate::components::request_card::RequestCard;
use crate::components::star_rating::StarDisplay;
use crate::net::api::appliances::NewAppliance;
use crate::net::api::{admin, appliances, feedback};
use crate::net::error::ApiError;
use crate::net::types::{Account, AdminStats, Appliance, Feedback, ServiceRequest};
use crate::state::auth::use_auth;
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;
use crate::util::format;
use crate::util::validation::{self, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Users,
    Technicians,
    Requests,
    Feedback,
    Appliances,
}

impl AdminTab {
    pub const ALL: [Self; 5] = [Self::Users, Self::Technicians, Self::Requests, Self::Feedback, Self::Appliances];

    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Technicians => "Technicians",
            Self::Requests => "Requests",
            Self::Feedback => "Feedback",
            Self::Appliances => "Appliances",
        }
    }
}

/// Technicians awaiting approval first, then by name.
pub fn sort_technicians(technicians: &mut [Account]) {
    technicians.sort_by(|a, b| {
        a.is_approved
            .unwrap_or(false)
            .cmp(&b.is_approved.unwrap_or(false))
            .then_with(|| a.name.cmp(&b.name))
    });
}

/// Catalogue entry from the add-appliance form. Category and base price are
/// optional; a price, when given, must be a positive amount.
///
/// # Errors
///
/// Missing name or an invalid price.
pub fn appliance_payload(name: &str, category: &str, base_price: &str) -> Result<NewAppliance, ValidationError> {
    let base_price = match validation::optional(base_price) {
        Some(price) => Some(validation::amount("base price", &price)?),
        None => None,
    };
    Ok(NewAppliance { name: validation::required("name", name)?, category: validation::optional(category), base_price })
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let stats = RwSignal::new(Remote::<AdminStats>::Loading);
    let tab = RwSignal::new(AdminTab::Users);

    let api = auth.api();
    load(stats, async move { admin::fetch_stats(&api).await });

    view! {
        <main class="page dashboard admin-dashboard">
            <header class="page__header">
                <h1>"Admin dashboard"</h1>
            </header>
            {move || match stats.get() {
                Remote::Ready(s) => view! {
                    <section class="stat-grid">
                        <div class="stat"><span>"Customers"</span><strong>{s.total_users}</strong></div>
                        <div class="stat"><span>"Technicians"</span><strong>{s.total_technicians}</strong></div>
                        <div class="stat"><span>"Awaiting approval"</span><strong>{s.pending_technicians}</strong></div>
                        <div class="stat"><span>"Requests"</span><strong>{s.total_requests}</strong></div>
                        <div class="stat"><span>"Completed"</span><strong>{s.completed_requests}</strong></div>
                        <div class="stat"><span>"Revenue"</span><strong>{format::currency(s.total_revenue)}</strong></div>
                    </section>
                }
                .into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Loading => view! { <p>"Loading stats..."</p> }.into_any(),
            }}
            <nav class="tabs">
                {AdminTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button class="tabs__tab" class:tabs__tab--active=move || tab.get() == t on:click=move |_| tab.set(t)>
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || match tab.get() {
                AdminTab::Users => view! { <UsersTab/> }.into_any(),
                AdminTab::Technicians => view! { <TechniciansTab/> }.into_any(),
                AdminTab::Requests => view! { <RequestsTab/> }.into_any(),
                AdminTab::Feedback => view! { <FeedbackTab/> }.into_any(),
                AdminTab::Appliances => view! { <AppliancesTab/> }.into_any(),
            }}
        </main>
    }
}

fn placeholder<T>(remote: &Remote<T>) -> Option<AnyView> {
    match remote {
        Remote::Loading => Some(view! { <p>"Loading..."</p> }.into_any()),
        Remote::Failed(message) => Some(view! { <p class="page__error">{message.clone()}</p> }.into_any()),
        Remote::Ready(_) => None,
    }
}

#[component]
fn UsersTab() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let users = RwSignal::new(Remote::<Vec<Account>>::Loading);
    let api = auth.api();
    load(users, async move { admin::users(&api).await });

    let toggle = Callback::new(move |(id, block): (String, bool)| {
        let api = auth.api();
        browser::spawn(async move {
            match admin::set_user_blocked(&api, &id, block).await {
                Ok(updated) => {
                    users.update(|u| {
                        u.update_ready(|list| {
                            if let Some(slot) = list.iter_mut().find(|a| a.id == updated.id) {
                                *slot = updated;
                            }
                        });
                    });
                    notify(toasts, ToastKind::Info, if block { "User blocked" } else { "User unblocked" });
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    });

    view! {
        <section class="admin-dashboard__tab">
            {move || {
                users.with(|u| {
                    placeholder(u).unwrap_or_else(|| {
                        let rows = u.ready().cloned().unwrap_or_default();
                        view! {
                            <table class="table">
                                <thead>
                                    <tr><th>"Name"</th><th>"Email"</th><th>"Phone"</th><th>"Verified"</th><th></th></tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|a| {
                                            let id = a.id.clone();
                                            let blocked = a.is_blocked;
                                            view! {
                                                <tr class:table__row--muted=blocked>
                                                    <td>{a.name}</td>
                                                    <td>{a.email}</td>
                                                    <td>{a.phone.unwrap_or_default()}</td>
                                                    <td>{if a.is_verified { "Yes" } else { "No" }}</td>
                                                    <td>
                                                        <button
                                                            class="btn"
                                                            class:btn--danger=!blocked
                                                            on:click=move |_| toggle.run((id.clone(), !blocked))
                                                        >
                                                            {if blocked { "Unblock" } else { "Block" }}
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    })
                })
            }}
        </section>
    }
}

#[component]
fn TechniciansTab() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let technicians = RwSignal::new(Remote::<Vec<Account>>::Loading);
    let api = auth.api();
    load(technicians, async move {
        let mut list = admin::technicians(&api).await?;
        sort_technicians(&mut list);
        Ok::<_, ApiError>(list)
    });

    let approve = Callback::new(move |id: String| {
        let api = auth.api();
        browser::spawn(async move {
            match admin::approve_technician(&api, &id).await {
                Ok(updated) => {
                    technicians.update(|t| {
                        t.update_ready(|list| {
                            if let Some(slot) = list.iter_mut().find(|a| a.id == updated.id) {
                                *slot = updated;
                            }
                        });
                    });
                    notify(toasts, ToastKind::Success, "Technician approved");
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    });

    view! {
        <section class="admin-dashboard__tab">
            {move || {
                technicians.with(|t| {
                    placeholder(t).unwrap_or_else(|| {
                        let rows = t.ready().cloned().unwrap_or_default();
                        view! {
                            <table class="table">
                                <thead>
                                    <tr><th>"Name"</th><th>"Skills"</th><th>"Experience"</th><th>"Rating"</th><th></th></tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|a| {
                                            let id = a.id.clone();
                                            let approved = a.is_approved.unwrap_or(false);
                                            view! {
                                                <tr>
                                                    <td>{a.name}<br/><small>{a.email}</small></td>
                                                    <td>{a.skills.join(", ")}</td>
                                                    <td>{a.experience_years.map(|y| format!("{y} yrs")).unwrap_or_default()}</td>
                                                    <td>{format::rating(a.rating)}</td>
                                                    <td>
                                                        {if approved {
                                                            view! { <span class="badge badge--success">"Approved"</span> }.into_any()
                                                        } else {
                                                            view! {
                                                                <button class="btn btn--primary" on:click=move |_| approve.run(id.clone())>
                                                                    "Approve"
                                                                </button>
                                                            }
                                                            .into_any()
                                                        }}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    })
                })
            }}
        </section>
    }
}

#[component]
fn RequestsTab() -> impl IntoView {
    let auth = use_auth();
    let requests = RwSignal::new(Remote::<Vec<ServiceRequest>>::Loading);
    let api = auth.api();
    load(requests, async move { admin::all_requests(&api).await });

    view! {
        <section class="admin-dashboard__tab">
            {move || {
                requests.with(|r| {
                    placeholder(r).unwrap_or_else(|| {
                        let list = r.ready().cloned().unwrap_or_default();
                        view! {
                            <div class="request-grid">
                                {list.into_iter().map(|req| view! { <RequestCard request=req/> }).collect_view()}
                            </div>
                        }
                        .into_any()
                    })
                })
            }}
        </section>
    }
}

#[component]
fn FeedbackTab() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let entries = RwSignal::new(Remote::<Vec<Feedback>>::Loading);
    let api = auth.api();
    load(entries, async move { feedback::all(&api).await });

    let remove = Callback::new(move |id: String| {
        let api = auth.api();
        browser::spawn(async move {
            match admin::delete_feedback(&api, &id).await {
                Ok(()) => {
                    entries.update(|e| e.update_ready(|list| list.retain(|f| f.id != id)));
                    notify(toasts, ToastKind::Info, "Feedback removed");
                }
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    });

    view! {
        <section class="admin-dashboard__tab">
            {move || {
                entries.with(|e| {
                    placeholder(e).unwrap_or_else(|| {
                        let list = e.ready().cloned().unwrap_or_default();
                        list.into_iter()
                            .map(|f| {
                                let id = f.id.clone();
                                let customer = f.user.map(|u| u.name).unwrap_or_default();
                                let technician = f.technician.map(|t| t.name).unwrap_or_default();
                                view! {
                                    <article class="review">
                                        <StarDisplay rating=f64::from(f.rating)/>
                                        <p>{f.comment}</p>
                                        <footer>{customer} " → " {technician}</footer>
                                        <button class="btn btn--danger" on:click=move |_| remove.run(id.clone())>
                                            "Delete"
                                        </button>
                                    </article>
                                }
                            })
                            .collect_view()
                            .into_any()
                    })
                })
            }}
        </section>
    }
}

#[component]
fn AppliancesTab() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let catalogue = RwSignal::new(Remote::<Vec<Appliance>>::Loading);
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let api = auth.api();
    load(catalogue, async move { appliances::list(&api).await });

    let on_add = {
        let auth = auth.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let payload = match appliance_payload(&name.get_untracked(), &category.get_untracked(), &price.get_untracked()) {
                Ok(p) => p,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            error.set(None);
            let api = auth.api();
            browser::spawn(async move {
                match appliances::create(&api, &payload).await {
                    Ok(created) => {
                        catalogue.update(|c| c.update_ready(|list| list.push(created)));
                        name.set(String::new());
                        category.set(String::new());
                        price.set(String::new());
                        notify(toasts, ToastKind::Success, "Appliance added");
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    let remove = Callback::new(move |id: String| {
        let api = auth.api();
        browser::spawn(async move {
            match appliances::delete(&api, &id).await {
                Ok(()) => catalogue.update(|c| c.update_ready(|list| list.retain(|a| a.id != id))),
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    });

    view! {
        <section class="admin-dashboard__tab">
            <form class="card admin-dashboard__add" on:submit=on_add>
                <FormField label="Name" value=name/>
                <FormField label="Category" value=category/>
                <FormField label="Base price" value=price input_type="number"/>
                <FormError error=error/>
                <button type="submit" class="btn btn--primary">"Add appliance"</button>
            </form>
            {move || {
                catalogue.with(|c| {
                    placeholder(c).unwrap_or_else(|| {
                        let list = c.ready().cloned().unwrap_or_default();
                        view! {
                            <ul class="catalogue">
                                {list
                                    .into_iter()
                                    .map(|a| {
                                        let id = a.id.clone();
                                        view! {
                                            <li>
                                                <strong>{a.name}</strong>
                                                " "
                                                <span>{a.category.unwrap_or_default()}</span>
                                                " "
                                                <span>{format::currency_or_dash(a.base_price)}</span>
                                                <button class="btn btn--link" on:click=move |_| remove.run(id.clone())>
                                                    "Remove"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    })
                })
            }}
        </section>
    }
}
