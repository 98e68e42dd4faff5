//! Non-interactive session commands.
//!
//! These go through the same auth client and session store as the
//! interactive client, so a session started here is picked up by it.

use anyhow::Result;
use nightvolt_core::{AuthClient, Config, Credentials, Role, Session, SessionStore};
use nightvolt_tui::features::login::outcome_notification;

pub async fn login(config: &Config, role: Role, email: String, password: String) -> Result<()> {
    let credentials = Credentials {
        email,
        password,
        role,
    };
    let client = AuthClient::new(config.auth_url.clone());
    let result = client.authenticate(&credentials).await;
    let notification = outcome_notification(role, &result);

    let user = match result {
        Ok(user) => user,
        Err(err) => {
            tracing::info!(%role, "sign-in failed: {err}");
            anyhow::bail!("{}: {}", notification.title, notification.description);
        }
    };

    let mut store = SessionStore::open_default();
    store.login(user)?;

    println!("{}", notification.title);
    println!("{}", notification.description);
    Ok(())
}

pub fn logout() -> Result<()> {
    let mut store = SessionStore::open_default();
    if store.logout()? {
        println!("Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}

pub fn whoami() {
    let mut store = SessionStore::open_default();
    match store.restore() {
        Session::LoggedOut => println!("Not logged in"),
        Session::LoggedIn(user) => {
            println!("Email: {}", user.email);
            println!("Role:  {}", user.role);
            println!("Label: {}", user.label);
            println!("UID:   {}", user.uid);
        }
    }
}
