//! Unverified decode of the token's payload segment.
//!
//! The backend issues a compact three-part credential (`header.payload.sig`).
//! The client only needs the subject identity out of the payload, so this
//! module base64url-decodes the middle segment and parses it as JSON —
//! signature verification stays on the server. Any failure degrades to
//! [`Claims::default`]: callers treat a missing subject as "unauthenticated"
//! instead of erroring.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Claims carried in the token payload. Every field is optional; unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identity. The backend serializes this either as a bare id
    /// string or as an object carrying an `id` field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<Subject>,
    /// Expiry (seconds since epoch). Not enforced on the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    /// Issued-at (seconds since epoch).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
}

/// The two shapes the `sub` claim arrives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Subject {
    Id { id: String },
    Plain(String),
}

impl Claims {
    /// Usable subject id, whichever shape `sub` arrived in. Empty strings
    /// count as absent.
    pub fn subject_id(&self) -> Option<&str> {
        let id = match self.sub.as_ref()? {
            Subject::Id { id } => id,
            Subject::Plain(id) => id,
        };
        (!id.is_empty()).then_some(id.as_str())
    }
}

/// Decode the payload segment of `token`. Never fails: malformed input
/// yields `Claims::default()`.
pub fn decode(token: &str) -> Claims {
    match try_decode(token) {
        Ok(claims) => claims,
        Err(reason) => {
            tracing::debug!("token payload not decodable: {reason}");
            Claims::default()
        }
    }
}

fn try_decode(token: &str) -> Result<Claims, String> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err("expected three dot-separated segments".to_string());
    };
    // Some issuers pad the segment; the no-pad engine rejects trailing '='.
    let raw = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| e.to_string())?;
    serde_json::from_slice(&raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn test_decode_object_subject() {
        let token = token_with_payload(r#"{"sub":{"id":"u-42","is_admin":false},"exp":1700000000}"#);
        let claims = decode(&token);
        assert_eq!(claims.subject_id(), Some("u-42"));
        assert_eq!(claims.exp, Some(1700000000));
    }

    #[test]
    fn test_decode_string_subject() {
        let token = token_with_payload(r#"{"sub":"u-7","iat":1699990000}"#);
        let claims = decode(&token);
        assert_eq!(claims.subject_id(), Some("u-7"));
        assert_eq!(claims.iat, Some(1699990000));
    }

    #[test]
    fn test_decode_tolerates_padded_segment() {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let body = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"padded"}"#);
        let claims = decode(&format!("{header}.{body}.sig"));
        assert_eq!(claims.subject_id(), Some("padded"));
    }

    #[test]
    fn test_missing_segments_yield_default() {
        assert_eq!(decode("not-a-token"), Claims::default());
        assert_eq!(decode("only.two"), Claims::default());
        assert_eq!(decode("one.two.three.four"), Claims::default());
        assert_eq!(decode(""), Claims::default());
    }

    #[test]
    fn test_invalid_encoding_yields_default() {
        assert_eq!(decode("header.!!not-base64!!.sig"), Claims::default());
    }

    #[test]
    fn test_invalid_json_yields_default() {
        let body = URL_SAFE_NO_PAD.encode("not json at all");
        assert_eq!(decode(&format!("h.{body}.s")), Claims::default());
    }

    #[test]
    fn test_empty_subject_is_unusable() {
        let token = token_with_payload(r#"{"sub":""}"#);
        assert_eq!(decode(&token).subject_id(), None);

        let token = token_with_payload(r#"{"sub":{"id":""}}"#);
        assert_eq!(decode(&token).subject_id(), None);

        let token = token_with_payload(r#"{"exp":123}"#);
        assert_eq!(decode(&token).subject_id(), None);
    }
}
