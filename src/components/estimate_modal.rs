//! Cost estimate dialog for technicians on an en-route job.

use leptos::prelude::*;

use super::form_field::FormError;
use crate::net::api::technician;
use crate::net::types::ServiceRequest;
use crate::state::auth::use_auth;
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;
use crate::util::validation::EstimateForm;

#[component]
pub fn EstimateModal(
    #[prop(into)] request_id: String,
    on_close: Callback<()>,
    on_submitted: Callback<ServiceRequest>,
) -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let cost = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = EstimateForm { cost: cost.get_untracked(), note: note.get_untracked() };
        let estimate = match form.prepare() {
            Ok(estimate) => estimate,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let api = auth.api();
        let request_id = request_id.clone();
        browser::spawn(async move {
            match technician::submit_estimate(&api, &request_id, &estimate).await {
                Ok(updated) => {
                    notify(toasts, ToastKind::Success, "Estimate sent to the customer");
                    on_submitted.run(updated);
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <form class="modal" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2 class="modal__title">"Submit estimate"</h2>
                <label class="field">
                    <span class="field__label">"Estimated cost"</span>
                    <input
                        class="field__input"
                        inputmode="decimal"
                        prop:value=move || cost.get()
                        on:input=move |ev| cost.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Diagnosis"</span>
                    <textarea
                        class="field__input"
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <FormError error=error/>
                <div class="modal__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                        "Send estimate"
                    </button>
                </div>
            </form>
        </div>
    }
}
