//! Login screen reducer.
//!
//! Key handling for both tabs and the outcome of a sign-in request.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nightvolt_core::{AuthError, Role, User};

use super::state::{Focus, LoginState};
use crate::common::{TaskId, TaskSeq};
use crate::effects::UiEffect;
use crate::features::notifications::Notification;

/// Handles a key press on the login screen.
pub fn handle_key(login: &mut LoginState, seq: &mut TaskSeq, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::F(1) => login.switch_tab(Role::Artist),
        KeyCode::F(2) => login.switch_tab(Role::Admin),
        KeyCode::Tab => {
            let form = login.active_form_mut();
            form.focus = form.focus.next();
        }
        KeyCode::BackTab => {
            let form = login.active_form_mut();
            form.focus = form.focus.prev();
        }
        KeyCode::Left | KeyCode::Right if login.active_form().focus == Focus::Tabs => {
            let next = match login.active {
                Role::Artist => Role::Admin,
                Role::Admin => Role::Artist,
            };
            login.switch_tab(next);
            login.active_form_mut().focus = Focus::Tabs;
        }
        KeyCode::Up => {
            let form = login.active_form_mut();
            if form.focus != Focus::Tabs {
                form.focus = form.focus.prev();
            }
        }
        KeyCode::Down => {
            let form = login.active_form_mut();
            if form.focus != Focus::Submit {
                form.focus = form.focus.next();
            }
        }
        KeyCode::Enter => {
            let role = login.active;
            return submit(login, seq, role);
        }
        KeyCode::Backspace => {
            let form = login.active_form_mut();
            if let Some(field) = form.focused_field_mut() {
                field.pop();
                form.hint = None;
            }
        }
        KeyCode::Char('u') if ctrl => {
            let form = login.active_form_mut();
            if let Some(field) = form.focused_field_mut() {
                field.clear();
                form.hint = None;
            }
        }
        KeyCode::Char(c) if !ctrl => {
            let form = login.active_form_mut();
            if let Some(field) = form.focused_field_mut() {
                field.push(c);
                form.hint = None;
            }
        }
        _ => {}
    }
    vec![]
}

/// Inserts pasted text into the focused field. Line breaks are dropped.
pub fn handle_paste(login: &mut LoginState, text: &str) {
    let form = login.active_form_mut();
    if let Some(field) = form.focused_field_mut() {
        field.extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
        form.hint = None;
    }
}

/// Submits the `role` form.
///
/// Ignored while any sign-in is pending. Local validation failures set an
/// inline hint and send nothing.
pub fn submit(login: &mut LoginState, seq: &mut TaskSeq, role: Role) -> Vec<UiEffect> {
    if login.is_busy() {
        tracing::debug!(%role, "submit ignored: sign-in already pending");
        return vec![];
    }

    let form = login.form_mut(role);
    if let Err(hint) = form.validate() {
        tracing::debug!(%role, message = hint.message, "submit refused locally");
        return vec![];
    }

    let credentials = form.credentials(role);
    let task = seq.next_id();
    login.begin(task, role);
    tracing::info!(%role, email = %credentials.email, "signing in");

    vec![UiEffect::Authenticate { task, credentials }]
}

/// What the app should do after a sign-in request finished.
#[derive(Debug)]
pub enum LoginOutcome {
    /// The result belongs to a request that is no longer pending.
    Stale,
    SignedIn {
        user: User,
        notification: Notification,
    },
    Failed {
        notification: Notification,
    },
}

/// Clears the busy state and maps the result onto a notification.
pub fn handle_login_result(
    login: &mut LoginState,
    task: TaskId,
    role: Role,
    result: Result<User, AuthError>,
) -> LoginOutcome {
    if !login.finish(task) {
        tracing::debug!(?task, "dropping stale sign-in result");
        return LoginOutcome::Stale;
    }

    let notification = outcome_notification(role, &result);
    match result {
        Ok(user) => LoginOutcome::SignedIn { user, notification },
        Err(err) => {
            if let AuthError::Connection(reason) = &err {
                tracing::warn!(%role, "sign-in transport failure: {reason}");
            }
            LoginOutcome::Failed { notification }
        }
    }
}

/// The notification reporting a finished sign-in attempt.
pub fn outcome_notification(role: Role, result: &Result<User, AuthError>) -> Notification {
    match result {
        Ok(user) => {
            let description = match role {
                Role::Artist => format!("Welcome, {}!", user.email),
                Role::Admin => format!("Welcome, administrator {}!", user.email),
            };
            Notification::normal("Signed in", description)
        }
        Err(AuthError::Rejected { message }) => {
            let description = message
                .clone()
                .unwrap_or_else(|| generic_rejection(role).to_string());
            Notification::destructive("Sign-in failed", description)
        }
        Err(AuthError::Connection(_)) => {
            Notification::destructive("Connection error", "Could not reach the server")
        }
    }
}

fn generic_rejection(role: Role) -> &'static str {
    match role {
        Role::Artist => "Invalid email or password",
        Role::Admin => "Invalid administrator credentials",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notifications::Variant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(login: &mut LoginState, seq: &mut TaskSeq, text: &str) {
        for c in text.chars() {
            handle_key(login, seq, key(KeyCode::Char(c)));
        }
    }

    fn filled(role: Role) -> LoginState {
        let mut login = LoginState::default();
        let mut seq = TaskSeq::default();
        login.switch_tab(role);
        type_text(&mut login, &mut seq, "nova@nightvolt.app");
        handle_key(&mut login, &mut seq, key(KeyCode::Tab));
        type_text(&mut login, &mut seq, "secret");
        login
    }

    fn user() -> User {
        User {
            uid: "u-1".to_string(),
            email: "nova@nightvolt.app".to_string(),
            role: "artist".to_string(),
            label: "Volt".to_string(),
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let login = filled(Role::Artist);
        assert_eq!(login.artist.email, "nova@nightvolt.app");
        assert_eq!(login.artist.password, "secret");
        assert_eq!(login.admin, Default::default());
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut login = filled(Role::Artist);
        let mut seq = TaskSeq::default();
        handle_key(&mut login, &mut seq, key(KeyCode::Backspace));
        assert_eq!(login.artist.password, "secre");
    }

    #[test]
    fn test_paste_drops_line_breaks() {
        let mut login = LoginState::default();
        handle_paste(&mut login, "nova@nightvolt.app\r\n");
        assert_eq!(login.artist.email, "nova@nightvolt.app");
    }

    #[test]
    fn test_function_keys_switch_tabs() {
        let mut login = LoginState::default();
        let mut seq = TaskSeq::default();
        handle_key(&mut login, &mut seq, key(KeyCode::F(2)));
        assert_eq!(login.active, Role::Admin);
        handle_key(&mut login, &mut seq, key(KeyCode::F(1)));
        assert_eq!(login.active, Role::Artist);
    }

    #[test]
    fn test_arrows_switch_tabs_only_on_tab_bar() {
        let mut login = LoginState::default();
        let mut seq = TaskSeq::default();
        handle_key(&mut login, &mut seq, key(KeyCode::Right));
        assert_eq!(login.active, Role::Artist);

        handle_key(&mut login, &mut seq, key(KeyCode::BackTab));
        assert_eq!(login.active_form().focus, Focus::Tabs);
        handle_key(&mut login, &mut seq, key(KeyCode::Right));
        assert_eq!(login.active, Role::Admin);
        assert_eq!(login.active_form().focus, Focus::Tabs);
    }

    #[test]
    fn test_enter_submits_active_tab_with_its_role() {
        let mut login = filled(Role::Admin);
        let mut seq = TaskSeq::default();
        let effects = handle_key(&mut login, &mut seq, key(KeyCode::Enter));

        let [UiEffect::Authenticate { task, credentials }] = effects.as_slice() else {
            panic!("expected one Authenticate effect, got {effects:?}");
        };
        assert_eq!(credentials.role, Role::Admin);
        assert_eq!(credentials.email, "nova@nightvolt.app");
        assert_eq!(credentials.password, "secret");
        assert_eq!(
            login.pending().map(|p| (p.task, p.role)),
            Some((*task, Role::Admin))
        );
    }

    #[test]
    fn test_empty_form_is_refused_locally() {
        let mut login = LoginState::default();
        let mut seq = TaskSeq::default();
        let effects = submit(&mut login, &mut seq, Role::Artist);
        assert!(effects.is_empty());
        assert!(!login.is_busy());
        assert!(login.artist.hint.is_some());
    }

    #[test]
    fn test_second_submit_ignored_while_pending_across_tabs() {
        let mut login = filled(Role::Artist);
        let mut seq = TaskSeq::default();
        assert_eq!(submit(&mut login, &mut seq, Role::Artist).len(), 1);
        assert!(submit(&mut login, &mut seq, Role::Artist).is_empty());

        login.admin = login.artist.clone();
        assert!(submit(&mut login, &mut seq, Role::Admin).is_empty());
    }

    #[test]
    fn test_success_outcome() {
        let mut login = filled(Role::Artist);
        let mut seq = TaskSeq::default();
        let task = match submit(&mut login, &mut seq, Role::Artist).pop() {
            Some(UiEffect::Authenticate { task, .. }) => task,
            other => panic!("unexpected {other:?}"),
        };

        let outcome = handle_login_result(&mut login, task, Role::Artist, Ok(user()));
        let LoginOutcome::SignedIn { user, notification } = outcome else {
            panic!("expected SignedIn");
        };
        assert_eq!(user.uid, "u-1");
        assert_eq!(notification.title, "Signed in");
        assert_eq!(notification.description, "Welcome, nova@nightvolt.app!");
        assert_eq!(notification.variant, Variant::Normal);
        assert!(!login.is_busy());
    }

    #[test]
    fn test_admin_success_greets_administrator() {
        let mut login = filled(Role::Admin);
        let mut seq = TaskSeq::default();
        submit(&mut login, &mut seq, Role::Admin);
        let task = login.pending().map(|p| p.task).unwrap();

        let LoginOutcome::SignedIn { notification, .. } =
            handle_login_result(&mut login, task, Role::Admin, Ok(user()))
        else {
            panic!("expected SignedIn");
        };
        assert_eq!(
            notification.description,
            "Welcome, administrator nova@nightvolt.app!"
        );
    }

    #[test]
    fn test_rejection_uses_server_message_or_generic_text() {
        for (role, message, expected) in [
            (Role::Artist, Some("bad password"), "bad password"),
            (Role::Artist, None, "Invalid email or password"),
            (Role::Admin, None, "Invalid administrator credentials"),
        ] {
            let mut login = filled(role);
            let mut seq = TaskSeq::default();
            submit(&mut login, &mut seq, role);
            let task = login.pending().map(|p| p.task).unwrap();

            let result = Err(AuthError::Rejected {
                message: message.map(str::to_string),
            });
            let LoginOutcome::Failed { notification } =
                handle_login_result(&mut login, task, role, result)
            else {
                panic!("expected Failed");
            };
            assert_eq!(notification.title, "Sign-in failed");
            assert_eq!(notification.description, expected);
            assert_eq!(notification.variant, Variant::Destructive);
            assert!(!login.is_busy());
        }
    }

    #[test]
    fn test_connection_error_clears_busy_state() {
        let mut login = filled(Role::Artist);
        let mut seq = TaskSeq::default();
        submit(&mut login, &mut seq, Role::Artist);
        let task = login.pending().map(|p| p.task).unwrap();

        let LoginOutcome::Failed { notification } = handle_login_result(
            &mut login,
            task,
            Role::Artist,
            Err(AuthError::Connection("refused".to_string())),
        ) else {
            panic!("expected Failed");
        };
        assert_eq!(notification.title, "Connection error");
        assert!(!login.is_busy());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut login = filled(Role::Artist);
        let mut seq = TaskSeq::default();
        let stale = seq.next_id();
        submit(&mut login, &mut seq, Role::Artist);

        let outcome = handle_login_result(&mut login, stale, Role::Artist, Ok(user()));
        assert!(matches!(outcome, LoginOutcome::Stale));
        assert!(login.is_busy());
    }
}
