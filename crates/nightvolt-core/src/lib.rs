//! Core library for the NIGHTVOLT artist portal client.
//!
//! Holds everything that is not terminal UI: the user record, the
//! persisted session, the authentication client, configuration and
//! logging setup.

pub mod auth;
pub mod config;
pub mod logging;
pub mod session;
pub mod user;

pub use auth::{AuthClient, AuthError};
pub use config::Config;
pub use session::{Session, SessionStore};
pub use user::{Credentials, Role, User};
