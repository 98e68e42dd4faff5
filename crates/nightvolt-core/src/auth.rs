//! Client for the portal authentication endpoint.
//!
//! One POST per sign-in attempt, JSON in and out. No retries and no
//! explicit timeout: the transport default decides how long a request
//! may stay pending.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::user::{Credentials, User};

/// Why a sign-in attempt did not produce a user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No response could be obtained.
    #[error("could not reach the authentication server: {0}")]
    Connection(String),

    /// A response arrived but did not authenticate the user: credentials
    /// rejected, non-2xx status, or a body that does not follow the contract.
    #[error("{}", .message.as_deref().unwrap_or("authentication rejected"))]
    Rejected { message: Option<String> },
}

impl AuthError {
    fn rejected(message: Option<String>) -> Self {
        AuthError::Rejected {
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    success: Value,
    #[serde(default)]
    error: Value,
    #[serde(default)]
    user: Option<Value>,
}

/// Authentication endpoint client.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    url: String,
}

impl AuthClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends `credentials` and returns the authenticated user.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<User, AuthError> {
        tracing::debug!(email = %credentials.email, role = %credentials.role, url = %self.url, "sending sign-in request");

        let response = self
            .http
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Connection(e.to_string()))?;

        let result = interpret_response(status.is_success(), &body);
        match &result {
            Ok(user) => tracing::info!(email = %user.email, role = %user.role, "sign-in accepted"),
            Err(err) => tracing::info!(%status, "sign-in rejected: {err}"),
        }
        result
    }
}

/// Maps an HTTP outcome onto the sign-in result.
///
/// Success requires a 2xx status, a truthy `success` and a well-formed
/// `user`. Anything else is a rejection carrying the server's `error`
/// string when one is present.
fn interpret_response(status_ok: bool, body: &str) -> Result<User, AuthError> {
    let Ok(parsed) = serde_json::from_str::<AuthResponse>(body) else {
        return Err(AuthError::rejected(None));
    };

    if !status_ok || !is_truthy(&parsed.success) {
        let message = parsed.error.as_str().map(str::to_string);
        return Err(AuthError::rejected(message));
    }

    parsed
        .user
        .and_then(|user| serde_json::from_value::<User>(user).ok())
        .ok_or_else(|| AuthError::rejected(None))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
