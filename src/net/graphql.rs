//! GraphQL query executor over HTTP.
//!
//! Operations are POSTed to the fixed endpoint; responses come back as the
//! standard `{data, errors}` envelope. Application errors are returned to the
//! caller alongside any data rather than thrown, so a single response can
//! carry both a usable payload and diagnostics.
//!
//! ERROR HANDLING
//! ==============
//! Only failures of the request itself (send, non-OK status, undecodable
//! body, no browser) become `TransportError`; everything the server reports
//! inside the envelope stays in `QueryResponse::errors`.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Endpoint every operation is POSTed to.
pub const GRAPHQL_ENDPOINT: &str = "/api/graphql";

/// The `{data, errors}` response envelope.
///
/// Both fields are independently optional: a response may carry data, errors,
/// or both at once.
#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    /// Operation payload, absent when the server produced no data.
    pub data: Option<T>,
    /// Application-level error descriptors, in server order.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A single error descriptor from the response envelope.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GraphQlError {
    /// Human-readable description supplied by the server.
    pub message: String,
}

/// Failure of the request itself, as opposed to errors the server reported.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be sent or came back with a non-OK status.
    #[error("{0}")]
    Request(String),
    /// The response body was not a valid envelope.
    #[error("malformed response: {0}")]
    Decode(String),
    /// No browser environment is available to issue requests from.
    #[error("network is not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("query request failed: {status}")
}

/// Decode a raw response body into the envelope.
///
/// # Errors
///
/// Returns [`TransportError::Decode`] when the body is not a valid envelope.
pub fn decode_response<T: DeserializeOwned>(raw: &str) -> Result<QueryResponse<T>, TransportError> {
    serde_json::from_str(raw).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Execute `query` with `variables` against the fixed endpoint.
///
/// Server-reported errors are returned inside the envelope, never as `Err`.
///
/// # Errors
///
/// Returns [`TransportError`] when the request cannot be completed at all.
pub async fn post_query<V, T>(query: &str, variables: &V) -> Result<QueryResponse<T>, TransportError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "query": query, "variables": variables });
        let response = gloo_net::http::Request::post(GRAPHQL_ENDPOINT)
            .json(&payload)
            .map_err(|e| TransportError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                log::warn!("query request failed to send: {e}");
                TransportError::Request(e.to_string())
            })?;
        if !response.ok() {
            log::warn!("query request returned status {}", response.status());
            return Err(TransportError::Request(request_failed_message(response.status())));
        }
        let raw = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        decode_response(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (query, variables);
        Err(TransportError::Unavailable)
    }
}
