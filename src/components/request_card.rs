//! Summary card for a service request, shared by the customer, technician and
//! admin lists.

use leptos::prelude::*;
use leptos_router::components::A;

use super::status_badge::StatusBadge;
use crate::net::types::ServiceRequest;
use crate::util::format;

#[component]
pub fn RequestCard(
    request: ServiceRequest,
    /// Detail route for this card; the card is not a link when absent.
    #[prop(optional, into)]
    href: Option<String>,
    /// Action buttons rendered in the card footer.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let title = match &request.brand {
        Some(brand) => format!("{} · {brand}", request.appliance_type),
        None => request.appliance_type.clone(),
    };
    let date = request
        .preferred_date
        .as_deref()
        .or(request.created_at.as_deref())
        .map(format::date)
        .unwrap_or_default();
    let cost = request
        .final_cost
        .map(|c| format!("Final {}", format::currency(c)))
        .or_else(|| request.estimated_cost.map(|c| format!("Estimate {}", format::currency(c))));
    let technician = request.technician.as_ref().map(|t| t.name.clone());
    let customer = request.user.as_ref().map(|u| u.name.clone());

    let heading = match href {
        Some(href) => view! { <A href=href>{title}</A> }.into_any(),
        None => view! { <span>{title}</span> }.into_any(),
    };

    view! {
        <article class="request-card">
            <header class="request-card__header">
                <h3 class="request-card__title">{heading}</h3>
                <StatusBadge status=request.status/>
            </header>
            <p class="request-card__description">{request.description}</p>
            <dl class="request-card__meta">
                <dt>"Address"</dt>
                <dd>{request.address}</dd>
                <dt>"Date"</dt>
                <dd>{date}</dd>
                {customer.map(|name| view! { <dt>"Customer"</dt><dd>{name}</dd> })}
                {technician.map(|name| view! { <dt>"Technician"</dt><dd>{name}</dd> })}
                {cost.map(|c| view! { <dt>"Cost"</dt><dd>{c}</dd> })}
            </dl>
            {children.map(|c| view! { <footer class="request-card__actions">{c()}</footer> })}
        </article>
    }
}
