//! Interactive client (the default command).

use anyhow::Result;
use nightvolt_core::{Config, SessionStore};

pub fn run(config: &Config) -> Result<()> {
    nightvolt_tui::run(config, SessionStore::open_default())
}
