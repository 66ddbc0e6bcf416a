//! Account forms outside the login page: registration for customers and
//! technicians, email verification, and the password reset pair.
//!
//! Every form validates locally first and only calls the backend with a
//! prepared payload. Backend messages are shown verbatim.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

use super::login::verify_email_href;
use crate::components::form_field::{FormError, FormField};
use crate::net::api::{auth as auth_api, technician as technician_api};
use crate::net::client::ApiClient;
use crate::state::auth::use_auth;
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;
use crate::util::validation::{self, RegistrationForm, TechnicianRegistrationForm, VerifyEmailForm};

/// Anonymous client for the configured backend.
fn anonymous_client() -> ApiClient {
    ApiClient::new(use_auth().config())
}

/// Signals backing the shared account fields.
#[derive(Clone, Copy)]
struct AccountFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    address: RwSignal<String>,
    password: RwSignal<String>,
    confirm: RwSignal<String>,
}

impl AccountFields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm: RwSignal::new(String::new()),
        }
    }

    fn form(self) -> RegistrationForm {
        RegistrationForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            address: self.address.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm.get_untracked(),
        }
    }
}

#[component]
fn AccountFieldset(fields: AccountFields) -> impl IntoView {
    view! {
        <FormField label="Full name" value=fields.name/>
        <FormField label="Email" value=fields.email input_type="email"/>
        <FormField label="Phone" value=fields.phone input_type="tel"/>
        <FormField label="Address" value=fields.address multiline=true/>
        <FormField label="Password" value=fields.password input_type="password"/>
        <FormField label="Confirm password" value=fields.confirm input_type="password"/>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let client = anonymous_client();
    let fields = AccountFields::new();
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match fields.form().prepare() {
            Ok(p) => p,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        browser::spawn(async move {
            match auth_api::register(&client, &payload).await {
                Ok(_) => navigate(&verify_email_href(&payload.email), NavigateOptions::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="page auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create your account"</h1>
                <AccountFieldset fields=fields/>
                <FormError error=error/>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    "Sign up"
                </button>
                <p class="auth-card__links">
                    "By signing up you accept the "
                    <A href="/terms">"terms"</A>
                    " and "
                    <A href="/privacy">"privacy policy"</A>
                    "."
                </p>
                <div class="auth-card__links">
                    <A href="/login">"Already registered? Log in"</A>
                </div>
            </form>
        </main>
    }
}

#[component]
pub fn TechnicianRegisterPage() -> impl IntoView {
    let client = anonymous_client();
    let fields = AccountFields::new();
    let skills = RwSignal::new(String::new());
    let experience = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let done = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = TechnicianRegistrationForm {
            account: fields.form(),
            skills: skills.get_untracked(),
            experience_years: experience.get_untracked(),
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
        let client = client.clone();
        browser::spawn(async move {
            match technician_api::register(&client, &payload).await {
                Ok(message) => done.set(Some(message)),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="page auth-page">
            <Show
                when=move || done.with(Option::is_some)
                fallback=move || {
                    view! {
                        <form class="auth-card" on:submit=on_submit.clone()>
                            <h1>"Join as a technician"</h1>
                            <AccountFieldset fields=fields/>
                            <FormField label="Skills" value=skills placeholder="AC, Refrigerator, Washing Machine"/>
                            <FormField label="Years of experience" value=experience input_type="number"/>
                            <FormError error=error/>
                            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                                "Apply"
                            </button>
                        </form>
                    }
                }
            >
                <div class="auth-card">
                    <h1>"Application received"</h1>
                    <p>{move || done.get().unwrap_or_default()}</p>
                    <p>"An admin will review your profile before you can accept jobs."</p>
                    <A href="/login" attr:class="btn btn--primary">"Go to login"</A>
                </div>
            </Show>
        </main>
    }
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let navigate = use_navigate();
    let toasts = use_toasts();
    let client = anonymous_client();
    let query = use_query_map();
    let email = RwSignal::new(query.with_untracked(|q| q.get("email").unwrap_or_default()));
    let otp = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = {
        let client = client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let form = VerifyEmailForm { email: email.get_untracked(), otp: otp.get_untracked() };
            let payload = match form.prepare() {
                Ok(p) => p,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            error.set(None);
            busy.set(true);
            let client = client.clone();
            let navigate = navigate.clone();
            browser::spawn(async move {
                match auth_api::verify_email(&client, &payload).await {
                    Ok(_) => {
                        notify(toasts, ToastKind::Success, "Email verified. You can log in now.");
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
    };

    let on_resend = move |_| {
        let address = match validation::email(&email.get_untracked()) {
            Ok(v) => v,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let client = client.clone();
        browser::spawn(async move {
            match auth_api::resend_verification(&client, &address).await {
                Ok(_) => notify(toasts, ToastKind::Info, "A new code is on its way"),
                Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
            }
        });
    };

    view! {
        <main class="page auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Verify your email"</h1>
                <p>"Enter the 6-digit code we sent to your inbox."</p>
                <FormField label="Email" value=email input_type="email"/>
                <FormField label="Code" value=otp placeholder="123456"/>
                <FormError error=error/>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    "Verify"
                </button>
                <button type="button" class="btn btn--link" on:click=on_resend>
                    "Resend code"
                </button>
            </form>
        </main>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let client = anonymous_client();
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let address = match validation::email(&email.get_untracked()) {
            Ok(v) => v,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let client = client.clone();
        browser::spawn(async move {
            match auth_api::forgot_password(&client, &address).await {
                Ok(message) => sent.set(Some(message)),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="page auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Reset your password"</h1>
                <FormField label="Email" value=email input_type="email"/>
                <FormError error=error/>
                <Show when=move || sent.with(Option::is_some)>
                    <p class="form__info">{move || sent.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    "Send reset link"
                </button>
                <div class="auth-card__links">
                    <A href="/login">"Back to login"</A>
                </div>
            </form>
        </main>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let toasts = use_toasts();
    let client = anonymous_client();
    let params = use_params_map();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let token = params.with_untracked(|p| p.get("token").unwrap_or_default());
        let new_password = match validation::new_password(&password.get_untracked(), &confirm.get_untracked()) {
            Ok(v) => v,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        browser::spawn(async move {
            match auth_api::reset_password(&client, &token, &new_password).await {
                Ok(_) => {
                    notify(toasts, ToastKind::Success, "Password updated. Log in with your new password.");
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="page auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Choose a new password"</h1>
                <FormField label="New password" value=password input_type="password"/>
                <FormField label="Confirm password" value=confirm input_type="password"/>
                <FormError error=error/>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    "Update password"
                </button>
            </form>
        </main>
    }
}
