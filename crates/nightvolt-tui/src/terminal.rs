//! Terminal lifecycle.
//!
//! The terminal is restored on normal exit (the runtime's `Drop`) and on
//! panic (the hook installed by `install_panic_hook`).

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type PortalTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Enters raw mode and the alternate screen, with mouse capture (sidebar
/// clicks) and bracketed paste (pasting into login fields).
pub fn setup_terminal() -> Result<PortalTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )
    .context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Undoes `setup_terminal`. Idempotent.
pub fn restore_terminal() -> Result<()> {
    // Must happen while still in raw mode.
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableBracketedPaste);

    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Restores the terminal before the default panic output is printed.
///
/// Install before `setup_terminal()`.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));
}
