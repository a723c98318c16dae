use dioxus::prelude::*;

use ui::use_session;

use crate::Route;

/// Layout wrapping every page: site header with the login affordance, then
/// the routed view. The login link only shows while unauthenticated.
#[component]
pub fn Shell() -> Element {
    let session = use_session();

    rsx! {
        header {
            class: "site-header",
            Link { class: "site-logo", to: Route::Home {}, "StaySpot" }
            if !session().is_authenticated() {
                Link { id: "login-link", class: "login-button", to: Route::Login {}, "Login" }
            }
        }

        main {
            Outlet::<Route> {}
        }
    }
}
