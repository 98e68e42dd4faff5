//! Application state.
//!
//! `AppState` is owned by the runtime and mutated only by the reducer.
//! Which screen is mounted follows the session: logged out shows the login
//! screen, logged in shows the dashboard.

use std::time::Duration;

use nightvolt_core::{Session, User};

use crate::common::TaskSeq;
use crate::features::dashboard::DashboardState;
use crate::features::login::LoginState;
use crate::features::notifications::NotificationsState;

#[derive(Debug)]
pub enum Screen {
    Login(LoginState),
    Dashboard(DashboardState),
}

impl Screen {
    pub fn for_session(session: &Session) -> Self {
        match session.user() {
            Some(user) => Screen::dashboard(user.clone()),
            None => Screen::login(),
        }
    }

    /// Freshly mounted login screen (empty forms, artist tab).
    pub fn login() -> Self {
        Screen::Login(LoginState::default())
    }

    /// Freshly mounted dashboard (releases section).
    pub fn dashboard(user: User) -> Self {
        Screen::Dashboard(DashboardState::new(user))
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub screen: Screen,
    pub notifications: NotificationsState,
    /// Task ids for the whole process; never reset on remount.
    pub task_seq: TaskSeq,
    /// Advanced on every tick; drives the busy spinner.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(session: &Session, notification_lifetime: Duration) -> Self {
        Self {
            should_quit: false,
            screen: Screen::for_session(session),
            notifications: NotificationsState::new(notification_lifetime),
            task_seq: TaskSeq::default(),
            spinner_frame: 0,
        }
    }

    /// The session implied by the mounted screen.
    pub fn session(&self) -> Session {
        match &self.screen {
            Screen::Login(_) => Session::LoggedOut,
            Screen::Dashboard(dash) => Session::LoggedIn(dash.user.clone()),
        }
    }

    /// True while a sign-in request is pending (busy spinner visible).
    pub fn is_busy(&self) -> bool {
        matches!(&self.screen, Screen::Login(login) if login.is_busy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dashboard::Section;

    #[test]
    fn test_screen_follows_session() {
        let app = AppState::new(&Session::LoggedOut, Duration::from_secs(5));
        assert!(matches!(app.screen, Screen::Login(_)));
        assert_eq!(app.session(), Session::LoggedOut);

        let user = User {
            uid: "u-1".to_string(),
            email: "nova@nightvolt.app".to_string(),
            role: "artist".to_string(),
            label: "Volt".to_string(),
        };
        let app = AppState::new(&Session::LoggedIn(user.clone()), Duration::from_secs(5));
        let Screen::Dashboard(dash) = &app.screen else {
            panic!("expected dashboard");
        };
        assert_eq!(dash.active, Section::Releases);
        assert_eq!(app.session(), Session::LoggedIn(user));
    }
}
