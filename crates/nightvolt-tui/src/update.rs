//! Reducer.
//!
//! `update` is the only place `AppState` changes. It never performs I/O:
//! network calls and session file writes are returned as `UiEffect`s for
//! the runtime to execute.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use nightvolt_core::{AuthError, Role, User};

use crate::common::TaskId;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::dashboard::{self, DashboardAction};
use crate::features::login::{self, LoginOutcome};
use crate::features::notifications::Notification;
use crate::state::{AppState, Screen};

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            app.notifications.expire(Instant::now());
            vec![]
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
        UiEvent::LoginFinished { task, role, result } => {
            handle_login_finished(app, task, role, result)
        }
        UiEvent::SessionStorageFailed { error } => {
            app.notifications
                .push(Notification::destructive("Session not saved", error));
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => match &mut app.screen {
            Screen::Dashboard(dash) => {
                let action = dashboard::handle_mouse(dash, mouse);
                apply_dashboard_action(app, action)
            }
            Screen::Login(_) => vec![],
        },
        Event::Paste(text) => {
            if let Screen::Login(login) = &mut app.screen {
                login::handle_paste(login, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return vec![UiEffect::Quit];
    }
    if key.code == KeyCode::Esc {
        app.notifications.dismiss_all();
        return vec![];
    }

    match &mut app.screen {
        Screen::Login(login) => login::handle_key(login, &mut app.task_seq, key),
        Screen::Dashboard(dash) => {
            let action = dashboard::handle_key(dash, key);
            apply_dashboard_action(app, action)
        }
    }
}

fn apply_dashboard_action(app: &mut AppState, action: DashboardAction) -> Vec<UiEffect> {
    match action {
        DashboardAction::None => vec![],
        DashboardAction::Logout => {
            tracing::info!("logging out");
            app.screen = Screen::login();
            vec![UiEffect::ClearSession]
        }
    }
}

fn handle_login_finished(
    app: &mut AppState,
    task: TaskId,
    role: Role,
    result: Result<User, AuthError>,
) -> Vec<UiEffect> {
    let Screen::Login(login) = &mut app.screen else {
        tracing::debug!(?task, "sign-in result arrived after leaving the login screen");
        return vec![];
    };

    match login::handle_login_result(login, task, role, result) {
        LoginOutcome::Stale => vec![],
        LoginOutcome::Failed { notification } => {
            app.notifications.push(notification);
            vec![]
        }
        LoginOutcome::SignedIn { user, notification } => {
            app.notifications.push(notification);
            app.screen = Screen::dashboard(user.clone());
            vec![UiEffect::PersistSession { user }]
        }
    }
}
