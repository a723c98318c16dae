//! # API crate — typed REST client for the StaySpot backend
//!
//! One [`ApiClient`] per call site, cheap to construct (it wraps a shared
//! `reqwest::Client`). Every operation follows the same contract: a non-2xx
//! status maps to [`ApiError::Status`], a transport failure to
//! [`ApiError::Http`], and a body that does not match the endpoint's schema
//! to [`ApiError::Decode`]. A bearer header is attached iff a token is
//! supplied; every request carries a JSON content type.
//!
//! ## Operations
//!
//! | Method | Endpoint | Call |
//! |--------|----------|------|
//! | POST | `/api/v1/auth/login` | [`ApiClient::login`] |
//! | GET | `/api/v1/places` | [`ApiClient::list_places`] |
//! | GET | `/api/v1/places/{id}` | [`ApiClient::get_place`] |
//! | GET | `/api/v1/reviews/places/{id}/reviews` | [`ApiClient::list_reviews`] |
//! | POST | `/api/v1/reviews` | [`ApiClient::create_review`] |
//!
//! `create_review` additionally validates its input locally and returns
//! [`ApiError::Invalid`] without touching the network when the token, place
//! id, text, or rating is missing.

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

mod error;
pub mod models;

pub use error::ApiError;
pub use models::{Credentials, Listing, LoginResponse, Owner, Review, ReviewDraft, Reviewer};

use models::NewReview;

/// Fixed remote origin the client talks to.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// HTTP client bound to one base origin.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// `POST /api/v1/auth/login`. No prior token is attached.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let request = self
            .http
            .post(format!("{}/api/v1/auth/login", self.base_url))
            .json(credentials);
        Self::expect_json(request).await
    }

    /// `GET /api/v1/places`.
    pub async fn list_places(&self, token: Option<&str>) -> Result<Vec<Listing>, ApiError> {
        Self::expect_json(self.get("/api/v1/places", token)).await
    }

    /// `GET /api/v1/places/{id}`.
    pub async fn get_place(&self, id: &str, token: Option<&str>) -> Result<Listing, ApiError> {
        Self::expect_json(self.get(&format!("/api/v1/places/{id}"), token)).await
    }

    /// `GET /api/v1/reviews/places/{id}/reviews`.
    pub async fn list_reviews(
        &self,
        place_id: &str,
        token: Option<&str>,
    ) -> Result<Vec<Review>, ApiError> {
        Self::expect_json(self.get(&format!("/api/v1/reviews/places/{place_id}/reviews"), token))
            .await
    }

    /// `POST /api/v1/reviews`. Rejects incomplete input locally with
    /// [`ApiError::Invalid`] before any network call.
    pub async fn create_review(
        &self,
        token: Option<&str>,
        draft: &ReviewDraft,
    ) -> Result<(), ApiError> {
        let token = token.filter(|t| !t.is_empty()).ok_or(ApiError::Invalid(
            "Missing required information for review submission.",
        ))?;
        let Some(rating) = draft.rating else {
            return Err(ApiError::Invalid(
                "Missing required information for review submission.",
            ));
        };
        if draft.place_id.is_empty() || draft.text.trim().is_empty() {
            return Err(ApiError::Invalid(
                "Missing required information for review submission.",
            ));
        }
        if draft.user_id.is_empty() {
            return Err(ApiError::Invalid(
                "Unable to identify user. Please log in again.",
            ));
        }

        let body = NewReview {
            text: draft.text.trim(),
            rating,
            user_id: &draft.user_id,
            place_id: &draft.place_id,
        };
        let response = self
            .http
            .post(format!("{}/api/v1/reviews", self.base_url))
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("review submission rejected with status {status}");
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }

    fn get(&self, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let request = self
            .http
            .get(format!("{}{path}", self.base_url))
            .header(CONTENT_TYPE, "application/json");
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn expect_json<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response.json().await.map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // An address nothing listens on: if validation ever let a request
    // through, these tests would fail with `ApiError::Http` instead.
    fn offline_client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:1")
    }

    fn complete_draft() -> ReviewDraft {
        ReviewDraft {
            place_id: "p-1".to_string(),
            text: "Lovely place".to_string(),
            rating: Some(4),
            user_id: "u-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_review_without_token_fails_locally() {
        let err = offline_client()
            .create_review(None, &complete_draft())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));

        let err = offline_client()
            .create_review(Some(""), &complete_draft())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_create_review_without_place_fails_locally() {
        let draft = ReviewDraft {
            place_id: String::new(),
            ..complete_draft()
        };
        let err = offline_client()
            .create_review(Some("tok"), &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_create_review_without_text_fails_locally() {
        let draft = ReviewDraft {
            text: "   ".to_string(),
            ..complete_draft()
        };
        let err = offline_client()
            .create_review(Some("tok"), &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_create_review_without_rating_fails_locally() {
        let draft = ReviewDraft {
            rating: None,
            ..complete_draft()
        };
        let err = offline_client()
            .create_review(Some("tok"), &draft)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Invalid(_)));
    }

    #[tokio::test]
    async fn test_create_review_without_user_id_names_the_user() {
        let draft = ReviewDraft {
            user_id: String::new(),
            ..complete_draft()
        };
        let err = offline_client()
            .create_review(Some("tok"), &draft)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("identify user"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_invalid_error_displays_its_message() {
        let err = ApiError::Invalid("Missing required information for review submission.");
        assert_eq!(
            err.to_string(),
            "Missing required information for review submission."
        );
    }
}
