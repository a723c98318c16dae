//! Listing detail page: the detail and location panels, the review list,
//! and — while authenticated — the review form.

use dioxus::prelude::*;

use api::{ApiClient, Listing, Review, ReviewDraft};
use ui::{use_session, ListingDetail, LocationPanel, ReviewList};

use crate::Route;

#[component]
pub fn PlaceDetail(id: String) -> Element {
    // Track the route param in a signal so the loader re-runs on change.
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let session = use_session();
    let mut listing = use_signal(|| Option::<Listing>::None);
    let mut reviews = use_signal(Vec::<Review>::new);
    let mut load_error = use_signal(|| Option::<String>::None);

    let mut review_text = use_signal(String::new);
    let mut review_rating = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut form_success = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let place_id = id_signal();
        async move {
            let client = ApiClient::default();
            let token = session().token;

            match client.get_place(&place_id, token.as_deref()).await {
                Ok(place) => listing.set(Some(place)),
                Err(e) => {
                    tracing::error!("loading listing {place_id} failed: {e}");
                    load_error.set(Some(
                        "Unable to load accommodation details. Try again later.".to_string(),
                    ));
                    return;
                }
            }

            // A review failure leaves the detail panel usable.
            match client.list_reviews(&place_id, token.as_deref()).await {
                Ok(items) => reviews.set(items),
                Err(e) => tracing::error!("loading reviews for {place_id} failed: {e}"),
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            form_error.set(None);
            form_success.set(None);

            let state = session();
            if !state.is_authenticated() {
                form_error.set(Some(
                    "You must be logged in to submit a review.".to_string(),
                ));
                return;
            }
            let Some(user_id) = state.subject_id() else {
                form_error.set(Some(
                    "Unable to identify user. Please log in again.".to_string(),
                ));
                return;
            };

            let draft = ReviewDraft {
                place_id: id_signal(),
                text: review_text().trim().to_string(),
                rating: review_rating().parse::<u8>().ok(),
                user_id,
            };

            let client = ApiClient::default();
            match client.create_review(state.token.as_deref(), &draft).await {
                Ok(()) => {
                    form_success.set(Some(
                        "Your review has been submitted successfully!".to_string(),
                    ));
                    review_text.set(String::new());
                    review_rating.set(String::new());

                    match client
                        .list_reviews(&id_signal(), state.token.as_deref())
                        .await
                    {
                        Ok(items) => reviews.set(items),
                        Err(e) => tracing::error!("refreshing reviews failed: {e}"),
                    }
                }
                Err(e) => {
                    tracing::error!("review submission failed: {e}");
                    form_error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        if let Some(place) = listing() {
            ListingDetail { listing: place.clone() }
            LocationPanel { latitude: place.latitude, longitude: place.longitude }
        } else if let Some(message) = load_error() {
            p { class: "error-message", "{message}" }
        } else {
            p { class: "loading", "Loading..." }
        }

        ReviewList { reviews: reviews() }

        if session().is_authenticated() {
            form {
                id: "review-form",
                onsubmit: handle_submit,
                h3 { "Add a review" }

                if let Some(message) = form_error() {
                    p { class: "error-message", "{message}" }
                }
                if let Some(message) = form_success() {
                    p { class: "success-message", "{message}" }
                }

                textarea {
                    name: "review",
                    placeholder: "Share your experience...",
                    value: review_text(),
                    oninput: move |evt| review_text.set(evt.value()),
                }
                select {
                    name: "rating",
                    onchange: move |evt| review_rating.set(evt.value()),
                    option { value: "", disabled: true, selected: review_rating().is_empty(), "Rating" }
                    for value in 1..=5 {
                        option {
                            value: "{value}",
                            selected: review_rating() == value.to_string(),
                            "{value}"
                        }
                    }
                }
                button { r#type: "submit", "Submit review" }
            }
        } else {
            p {
                class: "review-login-hint",
                Link { to: Route::Login {}, "Log in" }
                " to leave a review."
            }
        }
    }
}
