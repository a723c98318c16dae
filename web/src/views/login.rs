//! Login page with the email/password form.

use dioxus::prelude::*;

use api::{ApiClient, Credentials};
use ui::{token_store, use_session, SessionState};
use session::TokenStore;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    // Nothing to do here while already logged in.
    if session().is_authenticated() {
        nav.replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let credentials = Credentials {
                email: email().trim().to_string(),
                password: password(),
            };

            let client = ApiClient::default();
            match client.login(&credentials).await {
                Ok(response) if !response.access_token.is_empty() => {
                    token_store().write(&response.access_token);
                    session.set(SessionState {
                        token: Some(response.access_token),
                    });
                    nav.push(Route::Home {});
                }
                Ok(_) => {
                    loading.set(false);
                    error.set(Some("Login failed. Check your credentials.".to_string()));
                }
                Err(e) => {
                    tracing::error!("login failed: {e}");
                    loading.set(false);
                    error.set(Some(format!("Login error: {e}")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page",
            h1 { "Log in" }

            form {
                id: "login-form",
                onsubmit: handle_login,

                if let Some(message) = error() {
                    p { class: "error-message", "{message}" }
                }

                input {
                    r#type: "email",
                    name: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    name: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }
            }
        }
    }
}
