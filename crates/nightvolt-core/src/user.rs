//! User record and sign-in request types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Authenticated identity returned by the authentication service.
///
/// Flat and immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub uid: String,
    pub email: String,
    /// Role string as reported by the server ("artist" or "admin").
    pub role: String,
    /// Label name.
    pub label: String,
}

impl User {
    /// Uppercased first character of the email, used as avatar fallback.
    pub fn avatar_initial(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Sign-in role, selected by the login tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Artist,
    Admin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Artist, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Artist => "artist",
            Role::Admin => "admin",
        }
    }

    /// Tab title.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Artist => "Artist",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "artist" => Ok(Role::Artist),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{other}' (expected artist or admin)")),
        }
    }
}

/// Request body sent to the authentication endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .field("role", &self.role)
            .finish()
    }
}
