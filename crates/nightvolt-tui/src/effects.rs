//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations), so
//! the reducer stays pure: it mutates state and returns effects, never
//! touching the network or the session file itself.

use nightvolt_core::{Credentials, User};

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Send a sign-in request; the result comes back as
    /// `UiEvent::LoginFinished` tagged with `task`.
    Authenticate {
        task: TaskId,
        credentials: Credentials,
    },

    /// Store `user` as the active session and write it to disk.
    PersistSession { user: User },

    /// Drop the active session and delete the stored record.
    ClearSession,
}
