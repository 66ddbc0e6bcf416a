//! Login page with a role selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! Customers, technicians and admins share this form; the selected role picks
//! the login endpoint and the dashboard to land on. An unverified account is
//! told so and sent to the verification page after a short pause.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormError, FormField};
use crate::net::api::auth::{self as auth_api, Credentials};
use crate::net::client::ApiClient;
use crate::net::types::Role;
use crate::state::auth::use_auth;
use crate::util::browser;
use crate::util::guard::home_for;
use crate::util::login_flow::{self, LoginOutcome, VERIFY_EMAIL_PATH, VERIFY_REDIRECT_DELAY_MS};
use crate::util::validation;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let role = RwSignal::new(Role::User);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let state = auth.state;
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if busy.get() {
            return;
        }
        if let Some(path) = state.with(home_for) {
            navigate_home(path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = match validation::email(&email.get_untracked()) {
            Ok(v) => v,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let credentials = Credentials { email: email_value.clone(), password: password.get_untracked() };
        if credentials.password.is_empty() {
            error.set(Some("password is required".to_owned()));
            return;
        }
        let selected = role.get_untracked();
        error.set(None);
        info.set(None);
        busy.set(true);

        let auth = auth.clone();
        let navigate = navigate.clone();
        let client = ApiClient::new(auth.config());
        browser::spawn(async move {
            let outcome = match auth_api::login(&client, selected, &credentials).await {
                Ok(resp) => {
                    auth.login(resp.token, resp.user, selected);
                    login_flow::on_success(selected)
                }
                Err(e) => login_flow::on_error(&e),
            };
            match outcome {
                LoginOutcome::Dashboard(path) => navigate(path, NavigateOptions::default()),
                LoginOutcome::VerifyEmail { message } => {
                    info.set(Some(message));
                    browser::sleep_ms(VERIFY_REDIRECT_DELAY_MS).await;
                    navigate(&verify_email_href(&email_value), NavigateOptions::default());
                }
                LoginOutcome::Failed(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="page auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Log in"</h1>
                <div class="role-selector" role="radiogroup" aria-label="Account type">
                    {Role::ALL
                        .into_iter()
                        .map(|r| {
                            view! {
                                <button
                                    type="button"
                                    class="role-selector__option"
                                    class:role-selector__option--active=move || role.get() == r
                                    on:click=move |_| role.set(r)
                                >
                                    {r.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <FormField label="Email" value=email input_type="email"/>
                <FormField label="Password" value=password input_type="password"/>
                <FormError error=error/>
                <Show when=move || info.with(Option::is_some)>
                    <p class="form__info">{move || info.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Log in" }}
                </button>
                <div class="auth-card__links">
                    <A href="/forgot-password">"Forgot password?"</A>
                    <A href="/register">"Create an account"</A>
                </div>
            </form>
        </main>
    }
}

/// Verification page link that pre-fills the email.
pub fn verify_email_href(email: &str) -> String {
    format!("{VERIFY_EMAIL_PATH}?email={}", urlencoding::encode(email))
}
