//! Effect handlers.
//!
//! These perform the I/O behind `UiEffect`s and report back as `UiEvent`s.
//! They never touch `AppState`.

use nightvolt_core::{AuthClient, Credentials, SessionStore, User};

use crate::common::TaskId;
use crate::events::UiEvent;

/// Sends one sign-in request. Always yields `LoginFinished` for `task`.
pub async fn authenticate(client: AuthClient, task: TaskId, credentials: Credentials) -> UiEvent {
    let role = credentials.role;
    let result = client.authenticate(&credentials).await;
    UiEvent::LoginFinished { task, role, result }
}

/// Writes the session file. Returns an event only on failure.
pub fn persist_session(store: &mut SessionStore, user: User) -> Option<UiEvent> {
    match store.login(user) {
        Ok(()) => None,
        Err(err) => {
            tracing::warn!("failed to persist session: {err:#}");
            Some(UiEvent::SessionStorageFailed {
                error: format!("{err:#}"),
            })
        }
    }
}

/// Removes the session file. Returns an event only on failure.
pub fn clear_session(store: &mut SessionStore) -> Option<UiEvent> {
    match store.logout() {
        Ok(_) => None,
        Err(err) => {
            tracing::warn!("failed to clear session: {err:#}");
            Some(UiEvent::SessionStorageFailed {
                error: format!("{err:#}"),
            })
        }
    }
}
