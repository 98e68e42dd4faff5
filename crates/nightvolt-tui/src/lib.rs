//! Full-screen terminal client for the NIGHTVOLT artist portal.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr, stdout};

use anyhow::Result;
use nightvolt_core::{AuthClient, Config, SessionStore};
pub use runtime::TuiRuntime;
pub use state::{AppState, Screen};

/// Runs the interactive client until the user quits.
///
/// `store` is restored here; the mounted screen follows the result.
pub fn run(config: &Config, mut store: SessionStore) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The interactive client requires a terminal.\n\
             Use `nightvolt login` for non-interactive sign-in."
        );
    }

    let session = store.restore().clone();
    let state = AppState::new(&session, config.notification_lifetime());
    let client = AuthClient::new(config.auth_url.clone());
    tracing::info!(
        logged_in = session.is_logged_in(),
        auth_url = %client.url(),
        "starting interactive client"
    );

    let mut runtime = TuiRuntime::new(state, store, client)?;
    runtime.run()?;
    drop(runtime);

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
