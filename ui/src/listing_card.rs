use api::Listing;
use dioxus::prelude::*;

use crate::filter::PriceFilter;
use crate::format::trim_text;

/// One card in the listing grid. Filtering toggles visibility instead of
/// dropping the card, so changing the threshold never refetches.
#[component]
pub fn ListingCard(listing: Listing, filter: PriceFilter, on_view: EventHandler<String>) -> Element {
    let visible = filter.allows(listing.price);
    let description = trim_text(&listing.description, 100);
    let id = listing.id.clone();

    rsx! {
        div {
            class: "accommodation-item",
            style: if visible { "" } else { "display: none;" },

            div {
                class: "accommodation-card",
                h3 { class: "title", "{listing.title}" }
                div {
                    class: "info-section",
                    p { class: "description", "{description}" }
                    p { class: "location", "{listing.location}" }
                    p {
                        class: "price-tag",
                        strong { "€{listing.price}" }
                        " per night"
                    }
                    if let Some(rooms) = listing.rooms {
                        p { class: "rooms-info", "{rooms} rooms" }
                    }
                    if let Some(bathrooms) = listing.bathrooms {
                        p { class: "bathroom-info", "{bathrooms} bathrooms" }
                    }
                }
                button {
                    class: "view-button",
                    onclick: move |_| on_view.call(id.clone()),
                    "See details"
                }
            }
        }
    }
}
