//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::use_auth;

const SERVICES: &[(&str, &str)] = &[
    ("Air conditioners", "Gas top-ups, cooling faults and seasonal servicing."),
    ("Refrigerators", "Compressor, thermostat and defrost repairs."),
    ("Washing machines", "Drum, motor and drainage problems."),
    ("Kitchen appliances", "Microwaves, ovens, chimneys and more."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_auth().state;
    let dashboard = move || state.with(|s| s.role().map(|r| r.dashboard_path()));

    view! {
        <main class="page home">
            <section class="home__hero">
                <h1>"Appliance repair, at your door."</h1>
                <p>
                    "Book a verified technician, approve the estimate before work starts and chat with them live."
                </p>
                {move || match dashboard() {
                    Some(path) => view! { <A href=path attr:class="btn btn--primary">"Go to dashboard"</A> }.into_any(),
                    None => view! {
                        <div class="home__cta">
                            <A href="/register" attr:class="btn btn--primary">"Book a repair"</A>
                            <A href="/technician/register" attr:class="btn">"Become a technician"</A>
                        </div>
                    }
                    .into_any(),
                }}
            </section>
            <section class="home__services">
                {SERVICES
                    .iter()
                    .map(|(name, blurb)| {
                        view! {
                            <article class="home__service">
                                <h3>{*name}</h3>
                                <p>{*blurb}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>
        </main>
    }
}
