//! Shared UI for the StaySpot workspace: session context, listing and
//! review components, and the pure formatting/filtering helpers they render
//! with.

pub mod filter;
pub mod format;

mod auth;
pub use auth::{token_store, use_session, SessionProvider, SessionState};

mod listing_card;
pub use listing_card::ListingCard;

mod listing_detail;
pub use listing_detail::{ListingDetail, LocationPanel};

mod review_list;
pub use review_list::ReviewList;

pub use filter::PriceFilter;
