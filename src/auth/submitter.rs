//! Credential submission against the GraphQL login operation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wire contract: the request carries `{username, password}`; a success
//! payload arrives as `login { lifeTime token }`; error descriptors arrive in
//! the envelope's `errors` list, independently of whether `login` is also
//! present. Every message is kept in order; a response may grant a session
//! and still carry diagnostics.

#[cfg(test)]
#[path = "submitter_test.rs"]
mod submitter_test;

use serde::{Deserialize, Serialize};

use crate::auth::session::Session;
use crate::net::graphql::{QueryResponse, TransportError, post_query};

/// Login operation document.
pub const LOGIN_QUERY: &str = "\
query Login($username: String!, $password: String!) {
  login(username: $username, password: $password) {
    lifeTime
    token
  }
}";

/// The username/password pair submitted for authentication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Payload shape of the login operation.
#[derive(Debug, Deserialize)]
pub struct LoginData {
    /// Session granted by the server, absent when authentication failed.
    pub login: Option<Session>,
}

/// Result of a completed submission attempt.
///
/// The two fields are independently optional, not an either/or: a response
/// can carry a session, errors, or both at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginOutcome {
    pub session: Option<Session>,
    pub errors: Vec<String>,
}

/// Collapse the wire envelope into an outcome, keeping every error message.
pub fn outcome_from_response(response: QueryResponse<LoginData>) -> LoginOutcome {
    LoginOutcome {
        session: response.data.and_then(|data| data.login),
        errors: response.errors.into_iter().map(|error| error.message).collect(),
    }
}

/// Remote endpoint the sign-in flow submits credentials to.
#[allow(async_fn_in_trait)]
pub trait LoginBackend {
    /// Send `credentials`; resolves to an outcome unless the request itself fails.
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, TransportError>;
}

/// Production backend speaking GraphQL over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphQlBackend;

impl LoginBackend for GraphQlBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, TransportError> {
        let response = post_query::<_, LoginData>(LOGIN_QUERY, credentials).await?;
        Ok(outcome_from_response(response))
    }
}
