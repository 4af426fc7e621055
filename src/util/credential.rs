//! Structural decoding of the persisted session credential.
//!
//! The credential is a JWT-shaped `header.payload.signature` string issued by
//! the backend at login. Only the payload is read: the browser never holds the
//! signing key, so signature and expiry checks stay on the server, which
//! rejects stale tokens with `401`.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde::Deserialize;

use crate::nav::role::Role;
use crate::util::lenient::{string_or_null, string_or_number};

/// Reasons a credential cannot be decoded into an [`Identity`].
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// The stored value is empty or whitespace.
    #[error("credential is empty")]
    Empty,
    /// The token does not have a non-empty header and payload segment.
    #[error("credential has {0} segment(s), expected header.payload.signature")]
    Shape(usize),
    /// The payload segment is not base64.
    #[error("credential payload is not base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The payload bytes are not JSON.
    #[error("credential payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload is JSON but not an object.
    #[error("credential payload is not a JSON object")]
    NotObject,
}

/// Decoded user record carried by the session credential.
///
/// Missing or `null` fields decode as empty strings; an empty or unknown `user_role`
/// still yields an identity, just one without a recognized [`Role`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default, deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub user_name: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub user_role: String,
}

impl Identity {
    /// The recognized role, or `None` for any value outside the closed set.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.user_role)
    }

    /// First letter of the display name, upper-cased, for avatar badges.
    pub fn initial(&self) -> String {
        self.user_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Decode `token` into an [`Identity`] without verifying its signature.
///
/// # Errors
///
/// Returns a [`CredentialError`] when the token is empty, is not three
/// dot-separated segments, or its payload is not a base64 JSON object.
pub fn decode(token: &str) -> Result<Identity, CredentialError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CredentialError::Empty);
    }

    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments[0].is_empty() || segments[1].is_empty() {
        return Err(CredentialError::Shape(segments.len()));
    }

    let bytes = decode_segment(segments[1])?;
    let payload: serde_json::Value = serde_json::from_slice(&bytes)?;
    if !payload.is_object() {
        return Err(CredentialError::NotObject);
    }
    Ok(serde_json::from_value(payload)?)
}

/// Base64url with optional padding; some issuers emit the standard alphabet.
fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let unpadded = segment.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(unpadded)
        .or_else(|_| STANDARD_NO_PAD.decode(unpadded))
}
