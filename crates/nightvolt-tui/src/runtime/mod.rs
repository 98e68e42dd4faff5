//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here. The reducer produces `UiEffect`s and the
//! runtime turns them into network requests and session file writes.
//!
//! Async results come back through an inbox: spawned handlers send their
//! `UiEvent` to `inbox_tx`, and the loop drains `inbox_rx` every frame.

pub mod handlers;

use std::future::Future;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use nightvolt_core::{AuthClient, SessionStore};
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, PortalTerminal};
use crate::{render, update};

/// Tick cadence while a request is pending (spinner animation).
pub const BUSY_TICK: Duration = Duration::from_millis(80);

/// Tick cadence otherwise (notification expiry only).
pub const IDLE_TICK: Duration = Duration::from_millis(250);

pub struct TuiRuntime {
    terminal: PortalTerminal,
    pub state: AppState,
    store: SessionStore,
    client: AuthClient,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Takes over the terminal. `store` must already be restored.
    pub fn new(state: AppState, store: SessionStore, client: AuthClient) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            store,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs until the user quits.
    ///
    /// Must be called from within a multi-threaded tokio runtime: the loop
    /// blocks on terminal input while spawned requests make progress.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let events = self.collect_events()?;
            if !events.is_empty() {
                dirty = true;
            }

            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = if self.state.is_busy() {
            BUSY_TICK
        } else {
            IDLE_TICK
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick unless there is already work queued.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Runs a synchronous handler; a returned event goes straight back
    /// through the reducer.
    fn dispatch(&mut self, event: Option<UiEvent>) {
        if let Some(event) = event {
            let effects = update::update(&mut self.state, event);
            self.execute_effects(effects);
        }
    }

    /// Spawns an async handler and routes its event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::Authenticate { task, credentials } => {
                let client = self.client.clone();
                self.spawn_effect(move || handlers::authenticate(client, task, credentials));
            }
            UiEffect::PersistSession { user } => {
                let event = handlers::persist_session(&mut self.store, user);
                self.dispatch(event);
            }
            UiEffect::ClearSession => {
                let event = handlers::clear_session(&mut self.store);
                self.dispatch(event);
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
