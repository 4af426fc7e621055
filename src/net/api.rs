//! REST API helpers for communicating with the backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`, carrying the session
//! credential as a bearer token. Host builds: every call returns
//! [`ApiError::Unavailable`] so pages degrade without panicking.
//!
//! ERROR HANDLING
//! ==============
//! A `401` on an authenticated call means the backend no longer accepts the
//! credential; it is removed from the session and reported as
//! [`ApiError::Unauthorized`] so the shell can drop back to the login layout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::API_BASE_URL;
use crate::state::list::ListQuery;
use crate::state::session::Session;

use super::types::LoginRequest;
#[cfg(feature = "csr")]
use super::types::{ApiEnvelope, LoginResponse};

/// Failure modes of a backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend rejected the session credential.
    #[error("session expired, please sign in again")]
    Unauthorized,
    /// Non-success status with the backend's message, if any.
    #[error("request failed ({0}): {1}")]
    Status(u16, String),
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Absolute URL for a backend path.
pub fn endpoint(path: &str) -> String {
    let base = API_BASE_URL.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// `Authorization` header value for a credential.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Query pairs for a table endpoint. Blank search terms and filters are omitted.
pub fn table_query(query: &ListQuery, filters: &[(&str, String)]) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("page".to_owned(), query.page.to_string()),
        ("size".to_owned(), query.size.to_string()),
    ];
    if !query.search.is_empty() {
        pairs.push(("search".to_owned(), query.search.clone()));
    }
    pairs.extend(
        filters
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(key, value)| ((*key).to_owned(), value.trim().to_owned())),
    );
    pairs
}

/// Human-readable detail from an error body: its `message` field when the body
/// is JSON, otherwise the trimmed text.
pub fn error_detail(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed.as_ref().and_then(|value| {
        value
            .get("message")
            .or_else(|| value.get("errorMessage"))
            .and_then(serde_json::Value::as_str)
    });
    match message {
        Some(message) => message.to_owned(),
        None if body.trim().is_empty() => "no details".to_owned(),
        None => body.trim().to_owned(),
    }
}

#[cfg(feature = "csr")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "csr")]
fn with_auth(
    session: &Session,
    builder: gloo_net::http::RequestBuilder,
) -> gloo_net::http::RequestBuilder {
    match session.credential() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn check_status(
    session: Option<&Session>,
    resp: &gloo_net::http::Response,
) -> Result<(), ApiError> {
    let status = resp.status();
    if status == 401 {
        if let Some(session) = session {
            log::warn!("{} rejected the session credential", resp.url());
            session.remove_identity();
            return Err(ApiError::Unauthorized);
        }
    }
    if resp.ok() {
        return Ok(());
    }
    let body = resp.text().await.unwrap_or_default();
    log::warn!("{} failed with {status}", resp.url());
    Err(ApiError::Status(status, error_detail(&body)))
}

#[cfg(feature = "csr")]
async fn read_data<T: DeserializeOwned>(
    session: Option<&Session>,
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    check_status(session, &resp).await?;
    let envelope: ApiEnvelope<T> = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

/// `GET` a path and unwrap its `data` payload.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-success status, or a
/// body that does not decode as `T`.
pub async fn get<T: DeserializeOwned>(session: &Session, path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = with_auth(session, gloo_net::http::Request::get(&endpoint(path)))
            .send()
            .await
            .map_err(transport)?;
        read_data(Some(session), resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, path);
        Err(ApiError::Unavailable)
    }
}

/// `GET` one page of a table endpoint.
///
/// # Errors
///
/// Same as [`get`].
pub async fn get_table<T: DeserializeOwned>(
    session: &Session,
    path: &str,
    query: &ListQuery,
    filters: &[(&str, String)],
) -> Result<super::types::Paginated<T>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let pairs = table_query(query, filters);
        let builder = gloo_net::http::Request::get(&endpoint(path))
            .query(pairs.iter().map(|(key, value)| (key.as_str(), value)));
        let resp = with_auth(session, builder)
            .send()
            .await
            .map_err(transport)?;
        read_data(Some(session), resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, path, query, filters);
        Err(ApiError::Unavailable)
    }
}

/// `POST` a JSON body and unwrap the `data` payload.
///
/// # Errors
///
/// Same as [`get`], plus body serialization failures.
pub async fn post<B: Serialize, T: DeserializeOwned>(
    session: &Session,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = with_auth(session, gloo_net::http::Request::post(&endpoint(path)))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_data(Some(session), resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, path, body);
        Err(ApiError::Unavailable)
    }
}

/// `PATCH` a JSON body; the response payload is ignored.
///
/// # Errors
///
/// Same as [`post`].
pub async fn patch<B: Serialize>(session: &Session, path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = with_auth(session, gloo_net::http::Request::patch(&endpoint(path)))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check_status(Some(session), &resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, path, body);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE` a resource.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-success status.
pub async fn delete(session: &Session, path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = with_auth(session, gloo_net::http::Request::delete(&endpoint(path)))
            .send()
            .await
            .map_err(transport)?;
        check_status(Some(session), &resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, path);
        Err(ApiError::Unavailable)
    }
}

/// Exchange login form values for a session credential via `POST /auth/login`.
///
/// A `401` here means bad credentials, not an expired session, so it is
/// reported as [`ApiError::Status`].
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, rejected credentials, or a
/// response without a token.
pub async fn login(request: &LoginRequest) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/auth/login"))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let body: LoginResponse = read_data(None, resp).await?;
        Ok(body.token)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
