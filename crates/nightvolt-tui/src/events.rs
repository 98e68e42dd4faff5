//! UI event types.
//!
//! All external inputs (terminal, async results) are converted to `UiEvent`
//! before being processed by the reducer.

use crossterm::event::Event as CrosstermEvent;
use nightvolt_core::{AuthError, Role, User};

use crate::common::TaskId;

#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (spinner animation, notification expiry).
    Tick,

    /// Terminal input event (key, mouse, paste, resize).
    Terminal(CrosstermEvent),

    /// A sign-in request finished.
    LoginFinished {
        task: TaskId,
        role: Role,
        result: Result<User, AuthError>,
    },

    /// Writing or deleting the session file failed.
    SessionStorageFailed { error: String },
}
