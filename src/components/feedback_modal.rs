//! Rating dialog shown on completed requests.
//!
//! The submit button stays inert until a star is picked; the payload is only
//! built through [`FeedbackDraft::prepare`], so a zero rating never reaches
//! the API.

use leptos::prelude::*;

use super::form_field::FormError;
use super::star_rating::StarRating;
use crate::net::api::feedback;
use crate::state::auth::use_auth;
use crate::state::toast::{ToastKind, notify, use_toasts};
use crate::util::browser;
use crate::util::validation::FeedbackDraft;

#[component]
pub fn FeedbackModal(
    #[prop(into)] request_id: String,
    on_close: Callback<()>,
    /// Called after the backend accepted the feedback.
    on_submitted: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let rating = RwSignal::new(0_u8);
    let comment = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = FeedbackDraft { rating: rating.get_untracked(), comment: comment.get_untracked() };
        let payload = match draft.prepare(&request_id) {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let api = auth.api();
        browser::spawn(async move {
            match feedback::submit(&api, &payload).await {
                Ok(_) => {
                    notify(toasts, ToastKind::Success, "Thanks for your feedback");
                    on_submitted.run(());
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
                <h2 class="modal__title">"Rate this service"</h2>
                <StarRating value=rating/>
                <textarea
                    class="field__input"
                    placeholder="Tell us about the repair (optional)"
                    prop:value=move || comment.get()
                    on:input=move |ev| comment.set(event_target_value(&ev))
                ></textarea>
                <FormError error=error/>
                <div class="modal__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="btn btn--primary"
                        disabled=move || busy.get() || rating.get() == 0
                    >
                        "Submit"
                    </button>
                </div>
            </form>
        </div>
    }
}
