//! Session context for the UI.
//!
//! The token slot is read once when [`SessionProvider`] mounts and the
//! resulting [`SessionState`] is passed down as a context signal. Views
//! render from that explicit value; only the login flow writes it back.

use dioxus::prelude::*;
use session::{claims, Claims, TokenStore};

/// Session snapshot the views render from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub token: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Claims decoded from the current token; `Claims::default()` when there
    /// is no token or it does not decode.
    pub fn claims(&self) -> Claims {
        self.token.as_deref().map(claims::decode).unwrap_or_default()
    }

    /// Subject id for the review author, when the token decodes to one.
    pub fn subject_id(&self) -> Option<String> {
        self.claims().subject_id().map(str::to_string)
    }
}

/// Token store for the current platform: the `token` cookie on wasm, an
/// in-memory slot elsewhere.
pub fn token_store() -> impl TokenStore {
    #[cfg(target_arch = "wasm32")]
    {
        session::CookieStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        session::MemoryStore::new()
    }
}

/// Current session state. Updates when the login flow stores a token.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component; wrap the router with it once at startup.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| {
        let state = SessionState {
            token: token_store().read(),
        };
        if state.is_authenticated() {
            tracing::debug!("session token present at startup");
        }
        state
    });
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
