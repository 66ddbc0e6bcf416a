//! Appliance type selector for the new-request form.

use leptos::prelude::*;

use crate::net::types::Appliance;

/// Dropdown over the catalogue, bound to the selected appliance name.
#[component]
pub fn AppliancePicker(appliances: Vec<Appliance>, selected: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">"Appliance"</span>
            <select
                class="field__input"
                prop:value=move || selected.get()
                on:change=move |ev| selected.set(event_target_value(&ev))
            >
                <option value="">"Select an appliance"</option>
                {appliances
                    .into_iter()
                    .map(|a| {
                        let label = match a.base_price {
                            Some(price) => format!("{} (from {})", a.name, crate::util::format::currency(price)),
                            None => a.name.clone(),
                        };
                        view! { <option value=a.name>{label}</option> }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
