//! Listing index: fetches the grid once and filters it client-side by price.

use dioxus::prelude::*;

use api::{ApiClient, Listing};
use ui::{use_session, ListingCard, PriceFilter};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let mut listings = use_signal(Vec::<Listing>::new);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut filter = use_signal(PriceFilter::default);
    let nav = use_navigator();

    // Fetch the grid on mount; the price filter never refetches.
    let _loader = use_resource(move || async move {
        let client = ApiClient::default();
        match client.list_places(session().token.as_deref()).await {
            Ok(items) => listings.set(items),
            Err(e) => {
                tracing::error!("loading listings failed: {e}");
                load_error.set(Some(
                    "Unable to load accommodations. Try again later.".to_string(),
                ));
            }
        }
    });

    let on_view = move |id: String| {
        nav.push(Route::PlaceDetail { id });
    };

    rsx! {
        section {
            class: "filter-bar",
            label { r#for: "price-filter", "Max price: " }
            select {
                id: "price-filter",
                onchange: move |evt| filter.set(PriceFilter::parse(&evt.value())),
                option { value: "all", "All" }
                option { value: "50", "€50" }
                option { value: "100", "€100" }
                option { value: "150", "€150" }
            }
        }

        if let Some(message) = load_error() {
            p { class: "error-message", "{message}" }
        }

        div {
            id: "accommodations-container",
            for listing in listings() {
                ListingCard {
                    key: "{listing.id}",
                    listing: listing.clone(),
                    filter: filter(),
                    on_view,
                }
            }
        }
    }
}
