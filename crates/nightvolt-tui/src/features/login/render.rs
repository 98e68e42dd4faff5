//! Login screen view.

use nightvolt_core::Role;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use super::state::{Field, Focus, LoginForm, LoginState};
use crate::common::mask_secret;
use crate::common::widgets::{
    ACCENT, DANGER, INPUT_FIELD_HEIGHT, InputField, InputHint, MUTED, centered_rect, render_card,
    render_hints, render_input_field, spinner,
};

const CARD_WIDTH: u16 = 54;
const CARD_HEIGHT: u16 = 25;

/// Renders the login screen centered in `area`.
pub fn render_login(frame: &mut Frame, login: &LoginState, area: Rect, spinner_frame: usize) {
    let card = centered_rect(area, CARD_WIDTH, CARD_HEIGHT);
    let accent = role_color(login.active);
    let inner = render_card(frame, card, "NIGHTVOLT", accent);
    let inner = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let form = login.active_form();
    let [
        subtitle,
        _,
        tabs,
        _,
        email,
        email_hint,
        password,
        password_hint,
        _,
        button,
        _,
        hints,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(INPUT_FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(INPUT_FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Artist label portal",
            Style::default().fg(MUTED),
        )))
        .alignment(Alignment::Center),
        subtitle,
    );

    render_tabs(frame, login, form.focus == Focus::Tabs, tabs);

    render_input_field(
        frame,
        email,
        &InputField {
            label: "Email",
            value: &form.email,
            placeholder: email_placeholder(login.active),
            focused: form.focus == Focus::Email,
        },
    );
    render_field_hint(frame, form, Field::Email, email_hint);

    let masked = mask_secret(&form.password);
    render_input_field(
        frame,
        password,
        &InputField {
            label: "Password",
            value: &masked,
            placeholder: "••••••••",
            focused: form.focus == Focus::Password,
        },
    );
    render_field_hint(frame, form, Field::Password, password_hint);

    render_submit_button(
        frame,
        login,
        form.focus == Focus::Submit,
        spinner_frame,
        button,
    );

    render_hints(
        frame,
        hints,
        &[
            InputHint::new("Tab", "next"),
            InputHint::new("F1/F2", "role"),
            InputHint::new("Enter", "sign in"),
            InputHint::new("Ctrl+C", "quit"),
        ],
        accent,
    );
}

fn render_tabs(frame: &mut Frame, login: &LoginState, focused: bool, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let titles = Role::ALL
        .iter()
        .map(|role| Line::from(format!(" {} ", role.display_name())));
    let selected = Role::ALL
        .iter()
        .position(|role| *role == login.active)
        .unwrap_or(0);

    let mut highlight = Style::default()
        .fg(Color::Black)
        .bg(role_color(login.active))
        .add_modifier(Modifier::BOLD);
    if focused {
        highlight = highlight.add_modifier(Modifier::UNDERLINED);
    }

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(MUTED))
        .highlight_style(highlight)
        .divider(" ");
    let width = area.width.min(24);
    let centered = Rect::new(area.x + (area.width - width) / 2, area.y, width, 1);
    frame.render_widget(tabs, centered);
}

fn render_field_hint(frame: &mut Frame, form: &LoginForm, field: Field, area: Rect) {
    let Some(hint) = form.hint.as_ref().filter(|h| h.field == field) else {
        return;
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("! {}", hint.message),
            Style::default().fg(Color::Yellow),
        ))),
        area,
    );
}

fn render_submit_button(
    frame: &mut Frame,
    login: &LoginState,
    focused: bool,
    spinner_frame: usize,
    area: Rect,
) {
    let busy = login.is_busy();
    let color = if busy { MUTED } else { role_color(login.active) };
    let label = if busy {
        format!("{} Signing in...", spinner(spinner_frame))
    } else {
        match login.active {
            Role::Artist => "Sign in".to_string(),
            Role::Admin => "Sign in as administrator".to_string(),
        }
    };

    let mut border = Style::default().fg(color);
    let mut text = Style::default().fg(color);
    if focused && !busy {
        border = border.add_modifier(Modifier::BOLD);
        text = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
    }

    let block = Block::default().borders(Borders::ALL).border_style(border);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!(" {label} "), text)))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn role_color(role: Role) -> Color {
    match role {
        Role::Artist => ACCENT,
        Role::Admin => DANGER,
    }
}

fn email_placeholder(role: Role) -> &'static str {
    match role {
        Role::Artist => "artist@example.com",
        Role::Admin => "admin@nightvolt.app",
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::common::TaskId;

    fn draw(login: &LoginState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_login(f, login, f.area(), 0))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_password_is_masked() {
        let mut login = LoginState::default();
        login.artist.email = "nova@nightvolt.app".to_string();
        login.artist.password = "hunter2".to_string();

        let screen = draw(&login);
        assert!(screen.contains("nova@nightvolt.app"));
        assert!(!screen.contains("hunter2"));
        assert!(screen.contains("•••••••"));
    }

    #[test]
    fn test_busy_button_shows_spinner_text() {
        let mut login = LoginState::default();
        assert!(draw(&login).contains("Sign in"));

        login.begin(TaskId(7), Role::Artist);
        assert!(draw(&login).contains("Signing in..."));
    }

    #[test]
    fn test_admin_tab_has_its_own_button() {
        let mut login = LoginState::default();
        login.switch_tab(Role::Admin);
        assert!(draw(&login).contains("Sign in as administrator"));
    }
}
