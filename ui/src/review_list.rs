use api::Review;
use dioxus::prelude::*;

use crate::format::stars;

/// Review section for one listing: header, then either a placeholder or one
/// block per review.
#[component]
pub fn ReviewList(reviews: Vec<Review>) -> Element {
    rsx! {
        section {
            class: "reviews",
            h2 { "Guest Reviews" }

            if reviews.is_empty() {
                p { class: "no-reviews", "No reviews for this accommodation yet." }
            } else {
                div {
                    class: "reviews-list",
                    for review in reviews.iter() {
                        div {
                            class: "review-item",
                            div {
                                class: "review-header",
                                div {
                                    class: "reviewer-name",
                                    "{review.user.first_name} {review.user.last_name}"
                                }
                                div { class: "review-rating", {stars(review.rating)} }
                            }
                            div { class: "review-body", "{review.text}" }
                        }
                    }
                }
            }
        }
    }
}
