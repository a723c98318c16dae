//! Endpoint payload types.
//!
//! Each remote endpoint gets an explicit `serde`-validated structure; a body
//! that does not match its schema surfaces as a decode error instead of a
//! silent default.

use serde::{Deserialize, Serialize};

/// A rentable property as returned by `GET /api/v1/places`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Price per night.
    pub price: f64,
    #[serde(default)]
    pub rooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub owner: Owner,
}

/// Owner block embedded in a [`Listing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub first_name: String,
    pub last_name: String,
}

/// A review tied to one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    /// 1–5 as issued by the backend; not re-validated on the client.
    pub rating: u8,
    pub user: Reviewer,
    #[serde(default)]
    pub place_id: String,
}

/// Author block embedded in a [`Review`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reviewer {
    pub first_name: String,
    pub last_name: String,
}

/// Login form payload for `POST /api/v1/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: String,
}

/// Client-side review input, validated before any network call.
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    pub place_id: String,
    pub text: String,
    /// Parsed from the form's select control; `None` when unset.
    pub rating: Option<u8>,
    /// Subject id decoded from the session token.
    pub user_id: String,
}

/// Wire body for `POST /api/v1/reviews`.
#[derive(Debug, Serialize)]
pub(crate) struct NewReview<'a> {
    pub text: &'a str,
    pub rating: u8,
    pub user_id: &'a str,
    pub place_id: &'a str,
}
