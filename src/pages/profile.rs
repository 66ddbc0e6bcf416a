//! Profile page shared by customers and technicians.
//!
//! Technicians additionally edit skills and experience and see the reviews
//! left on their completed jobs. After a successful save the stored session
//! profile is refreshed from the backend.

use leptos::prelude::*;

use crate::components::form_field::{FormError, FormField};
use crate::components::star_rating::StarDisplay;
use crate::net::api::{auth as auth_api, feedback as feedback_api, technician as technician_api};
use crate::net::api::auth::ProfileUpdate;
use crate::net::api::technician::TechnicianProfileUpdate;
use crate::net::types::{Feedback, Role};
use crate::state::auth::use_auth;
use crate::state::remote::{Remote, load};
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;
use crate::util::format;
use crate::util::validation::{PasswordChangeForm, ProfileForm};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let role = auth.state.with_untracked(|s| s.role());
    let is_technician = role == Some(Role::Technician);
    let form = auth
        .state
        .with_untracked(|s| s.user().map(ProfileForm::from_account).unwrap_or_default());

    view! {
        <main class="page profile">
            <header class="page__header">
                <h1>"My profile"</h1>
                <span class="profile__email">
                    {move || auth.state.with(|s| s.user().map(|u| u.email.clone()).unwrap_or_default())}
                </span>
            </header>
            <ProfileDetails initial=form is_technician=is_technician/>
            <PasswordSection/>
            {is_technician.then(|| view! { <TechnicianReviews/> })}
        </main>
    }
}

enum ProfilePayload {
    Customer(ProfileUpdate),
    Technician(TechnicianProfileUpdate),
}

#[component]
fn ProfileDetails(initial: ProfileForm, is_technician: bool) -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let name = RwSignal::new(initial.name);
    let phone = RwSignal::new(initial.phone);
    let address = RwSignal::new(initial.address);
    let skills = RwSignal::new(initial.skills);
    let experience = RwSignal::new(initial.experience_years);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ProfileForm {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            skills: skills.get_untracked(),
            experience_years: experience.get_untracked(),
        };
        let prepared = if is_technician {
            form.prepare_technician().map(ProfilePayload::Technician)
        } else {
            form.prepare().map(ProfilePayload::Customer)
        };
        let payload = match prepared {
            Ok(p) => p,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let auth = auth.clone();
        browser::spawn(async move {
            let api = auth.api();
            let result = match payload {
                ProfilePayload::Customer(p) => auth_api::update_profile(&api, &p).await,
                ProfilePayload::Technician(p) => technician_api::update_profile(&api, &p).await,
            };
            match result {
                Ok(_) => {
                    // Other pages read the stored profile.
                    let _ = auth.refresh_profile().await;
                    notify(toasts, ToastKind::Success, "Profile updated");
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="card profile__form" on:submit=on_submit>
            <h2>"Details"</h2>
            <FormField label="Full name" value=name/>
            <FormField label="Phone" value=phone input_type="tel"/>
            <FormField label="Address" value=address multiline=true/>
            {is_technician
                .then(|| {
                    view! {
                        <FormField label="Skills" value=skills placeholder="AC, Refrigerator"/>
                        <FormField label="Years of experience" value=experience input_type="number"/>
                    }
                })}
            <FormError error=error/>
            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                "Save changes"
            </button>
        </form>
    }
}

#[component]
fn PasswordSection() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = PasswordChangeForm {
            current: current.get_untracked(),
            new: new.get_untracked(),
            confirm: confirm.get_untracked(),
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
        browser::spawn(async move {
            match auth_api::change_password(&api, &payload).await {
                Ok(()) => {
                    current.set(String::new());
                    new.set(String::new());
                    confirm.set(String::new());
                    notify(toasts, ToastKind::Success, "Password changed");
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    view! {
        <form class="card profile__form" on:submit=on_submit>
            <h2>"Change password"</h2>
            <FormField label="Current password" value=current input_type="password"/>
            <FormField label="New password" value=new input_type="password"/>
            <FormField label="Confirm new password" value=confirm input_type="password"/>
            <FormError error=error/>
            <button type="submit" class="btn btn--secondary" disabled=move || busy.get()>
                "Change password"
            </button>
        </form>
    }
}

#[component]
fn TechnicianReviews() -> impl IntoView {
    let auth = use_auth();
    let reviews = RwSignal::new(Remote::<Vec<Feedback>>::Loading);
    let technician_id = auth.state.with_untracked(|s| s.user().map(|u| u.id.clone()).unwrap_or_default());
    let api = auth.api();
    load(reviews, async move { feedback_api::for_technician(&api, &technician_id).await });

    view! {
        <section class="card profile__reviews">
            <h2>"Customer reviews"</h2>
            {move || match reviews.get() {
                Remote::Loading => view! { <p>"Loading reviews..."</p> }.into_any(),
                Remote::Failed(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                Remote::Ready(list) if list.is_empty() => view! { <p class="page__empty">"No reviews yet."</p> }.into_any(),
                Remote::Ready(list) => list
                    .into_iter()
                    .map(|f| {
                        let author = f.user.map(|u| u.name).unwrap_or_else(|| "Customer".to_owned());
                        let when = f.created_at.as_deref().map(format::date).unwrap_or_default();
                        view! {
                            <article class="review">
                                <StarDisplay rating=f64::from(f.rating)/>
                                <p>{f.comment}</p>
                                <footer>{author} " · " {when}</footer>
                            </article>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </section>
    }
}
