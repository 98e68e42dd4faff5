//! Dashboard reducer: sidebar navigation and logout.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::state::{DashboardState, LOGOUT_INDEX, Section};

/// What the dashboard asks of the app after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Logout,
}

pub fn handle_key(dash: &mut DashboardState, key: KeyEvent) -> DashboardAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('l') if ctrl => return DashboardAction::Logout,
        KeyCode::Up | KeyCode::Char('k') => dash.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => dash.cursor_down(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if dash.cursor == LOGOUT_INDEX {
                return DashboardAction::Logout;
            }
            if let Some(section) = Section::from_index(dash.cursor) {
                dash.select_section(section);
            }
        }
        KeyCode::Char(c @ '1'..='6') => {
            let index = usize::from(c as u8 - b'1');
            if let Some(section) = Section::from_index(index) {
                dash.select_section(section);
            }
        }
        _ => {}
    }
    DashboardAction::None
}

pub fn handle_mouse(dash: &mut DashboardState, mouse: MouseEvent) -> DashboardAction {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return DashboardAction::None;
    }
    if dash.is_logout_at(mouse.column, mouse.row) {
        return DashboardAction::Logout;
    }
    if let Some(section) = dash.section_at(mouse.column, mouse.row) {
        dash.select_section(section);
    }
    DashboardAction::None
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventKind;
    use nightvolt_core::User;
    use ratatui::layout::Rect;

    use super::*;

    fn dash() -> DashboardState {
        DashboardState::new(User {
            uid: "u-1".to_string(),
            email: "nova@nightvolt.app".to_string(),
            role: "artist".to_string(),
            label: "Volt".to_string(),
        })
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_number_keys_select_sections() {
        let mut dash = dash();
        for (i, section) in Section::ALL.iter().enumerate() {
            let digit = char::from(b'1' + i as u8);
            assert_eq!(
                handle_key(&mut dash, key(KeyCode::Char(digit))),
                DashboardAction::None
            );
            assert_eq!(dash.active, *section);
        }
    }

    #[test]
    fn test_cursor_then_enter_selects() {
        let mut dash = dash();
        handle_key(&mut dash, key(KeyCode::Down));
        handle_key(&mut dash, key(KeyCode::Char('j')));
        assert_eq!(dash.active, Section::Releases);
        handle_key(&mut dash, key(KeyCode::Enter));
        assert_eq!(dash.active, Section::Fix);
    }

    #[test]
    fn test_enter_on_logout_button_logs_out() {
        let mut dash = dash();
        for _ in 0..LOGOUT_INDEX {
            handle_key(&mut dash, key(KeyCode::Down));
        }
        assert_eq!(
            handle_key(&mut dash, key(KeyCode::Enter)),
            DashboardAction::Logout
        );
    }

    #[test]
    fn test_ctrl_l_logs_out() {
        let mut dash = dash();
        let event = KeyEvent::new_with_kind(
            KeyCode::Char('l'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );
        assert_eq!(handle_key(&mut dash, event), DashboardAction::Logout);
    }

    #[test]
    fn test_clicks_select_each_entry() {
        let mut dash = dash();
        dash.menu_area.set(Rect::new(1, 5, 24, 6));
        dash.logout_area.set(Rect::new(1, 25, 24, 3));

        for (i, section) in Section::ALL.iter().enumerate() {
            let action = handle_mouse(&mut dash, click(3, 5 + i as u16));
            assert_eq!(action, DashboardAction::None);
            assert_eq!(dash.active, *section);
        }

        assert_eq!(handle_mouse(&mut dash, click(3, 26)), DashboardAction::Logout);
    }

    #[test]
    fn test_clicks_outside_menu_are_ignored() {
        let mut dash = dash();
        dash.menu_area.set(Rect::new(1, 5, 24, 6));
        handle_mouse(&mut dash, click(60, 5));
        assert_eq!(dash.active, Section::Releases);

        let mut release = click(3, 5);
        release.kind = MouseEventKind::Up(MouseButton::Left);
        handle_mouse(&mut dash, release);
        assert_eq!(dash.active, Section::Releases);
    }
}
