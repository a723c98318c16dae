use api::Listing;
use dioxus::prelude::*;

/// Detail panel: full description, host, price, amenities. Coordinates live
/// in the separate [`LocationPanel`] so pages can place or omit it freely.
#[component]
pub fn ListingDetail(listing: Listing) -> Element {
    rsx! {
        article {
            class: "accommodation-details",
            h1 { class: "accommodation-title", "{listing.title}" }
            div {
                class: "host-info",
                "Hosted by {listing.owner.first_name} {listing.owner.last_name}"
            }
            div {
                class: "pricing",
                "€{listing.price} per night"
            }
            div { class: "full-description", "{listing.description}" }
            div {
                class: "features",
                h3 { "Amenities" }
                ul {
                    class: "amenities-list",
                    for amenity in listing.amenities.iter() {
                        li { "{amenity}" }
                    }
                }
            }
        }
    }
}

/// Coordinates panel rendered independently of the detail panel.
#[component]
pub fn LocationPanel(latitude: f64, longitude: f64) -> Element {
    rsx! {
        div {
            class: "location-info",
            h2 { "Location" }
            p { class: "coordinates", "Coordinates: {latitude}, {longitude}" }
        }
    }
}
