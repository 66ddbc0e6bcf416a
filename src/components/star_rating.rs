//! Five-star rating input and read-only display.

use leptos::prelude::*;

use crate::util::validation::MAX_RATING;

/// Clickable stars bound to `value`. `0` means nothing picked yet.
#[component]
pub fn StarRating(value: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="star-rating" role="radiogroup" aria-label="Rating">
            {(1..=MAX_RATING)
                .map(|star| {
                    view! {
                        <button
                            type="button"
                            class="star-rating__star"
                            class:star-rating__star--on={move || value.get() >= star}
                            aria-label=format!("{star} star")
                            on:click=move |_| value.set(star)
                        >
                            "★"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Filled/empty stars for an average rating.
#[component]
pub fn StarDisplay(rating: f64) -> impl IntoView {
    let filled = filled_stars(rating);
    let stars: String = (1..=MAX_RATING).map(|i| if i <= filled { '★' } else { '☆' }).collect();
    view! { <span class="star-display" title=format!("{rating:.1}")>{stars}</span> }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn filled_stars(rating: f64) -> u8 {
    rating.round().clamp(0.0, f64::from(MAX_RATING)) as u8
}
