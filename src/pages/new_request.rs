//! Service request form with the appliance catalogue picker.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::appliance_picker::AppliancePicker;
use crate::components::form_field::{FormError, FormField};
use crate::net::api::{appliances, service_requests};
use crate::net::types::Appliance;
use crate::state::auth::use_auth;
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;
use crate::util::validation::ServiceRequestForm;

#[component]
pub fn NewRequestPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let catalogue = RwSignal::new(Remote::<Vec<Appliance>>::Loading);

    let appliance = RwSignal::new(String::new());
    let brand = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let default_address = auth.state.with_untracked(|s| s.user().and_then(|u| u.address.clone()));
    let address = RwSignal::new(default_address.unwrap_or_default());
    let preferred_date = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    {
        let api = auth.api();
        load(catalogue, async move { appliances::list(&api).await });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ServiceRequestForm {
            appliance_type: appliance.get_untracked(),
            brand: brand.get_untracked(),
            description: description.get_untracked(),
            address: address.get_untracked(),
            preferred_date: preferred_date.get_untracked(),
        };
        let payload = match form.prepare() {
            Ok(p) => p,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let api = auth.api();
        let navigate = navigate.clone();
        browser::spawn(async move {
            match service_requests::create(&api, &payload).await {
                Ok(created) => {
                    notify(toasts, ToastKind::Success, "Request submitted. We're finding a technician.");
                    navigate(&format!("/user/requests/{}", created.id), NavigateOptions::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="page">
            <form class="form-card" on:submit=on_submit>
                <h1>"Book a repair"</h1>
                {move || match catalogue.get() {
                    Remote::Ready(list) => view! { <AppliancePicker appliances=list selected=appliance/> }.into_any(),
                    Remote::Loading => view! { <p>"Loading appliances..."</p> }.into_any(),
                    // Free text still works when the catalogue is unavailable.
                    Remote::Failed(_) => view! { <FormField label="Appliance" value=appliance/> }.into_any(),
                }}
                <FormField label="Brand" value=brand placeholder="Optional"/>
                <FormField label="What's wrong?" value=description multiline=true/>
                <FormField label="Address" value=address multiline=true/>
                <FormField label="Preferred date" value=preferred_date input_type="date"/>
                <FormError error=error/>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    "Submit request"
                </button>
            </form>
        </main>
    }
}
