//! Client-side session storage for the StaySpot frontend.
//!
//! Holds exactly one bearer token in a persisted slot. On wasm the slot is
//! the `token` cookie ([`CookieStore`]); on native builds an in-memory slot
//! ([`MemoryStore`]) stands in so the rest of the workspace stays testable.
//! The [`claims`] module decodes the token's payload segment without
//! verifying its signature.

pub mod claims;

mod memory;
pub use memory::MemoryStore;

#[cfg(target_arch = "wasm32")]
mod cookie;
#[cfg(target_arch = "wasm32")]
pub use cookie::CookieStore;

pub use claims::Claims;

/// The single persisted token slot.
///
/// `write` overwrites any previous value; there is no delete and no expiry
/// tracked on the client. Implementations never touch the network.
pub trait TokenStore {
    /// Current token, or `None` when the slot is unset.
    fn read(&self) -> Option<String>;

    /// Persist `token` for the whole site path, replacing any previous value.
    fn write(&self, token: &str);
}
