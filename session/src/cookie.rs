use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::TokenStore;

const TOKEN_KEY: &str = "token";

/// Cookie-backed token slot: one `token` cookie, whole-site path, no expiry
/// attribute (a session cookie from the browser's point of view).
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

impl CookieStore {
    pub fn new() -> Self {
        Self
    }
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

impl TokenStore for CookieStore {
    fn read(&self) -> Option<String> {
        let cookies = html_document()?.cookie().ok()?;
        cookies.split(';').find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == TOKEN_KEY).then(|| value.to_string())
        })
    }

    fn write(&self, token: &str) {
        let Some(document) = html_document() else {
            return;
        };
        if document
            .set_cookie(&format!("{TOKEN_KEY}={token}; path=/"))
            .is_err()
        {
            web_sys::console::warn_1(&"failed to persist session cookie".into());
        }
    }
}
