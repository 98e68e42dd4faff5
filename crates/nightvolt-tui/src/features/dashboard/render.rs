//! Dashboard view: sidebar, header bar and the section panel.

use nightvolt_core::User;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::state::{DashboardState, LOGOUT_INDEX, Section};
use crate::common::truncate_with_ellipsis;
use crate::common::widgets::{ACCENT, DANGER, InputHint, MUTED, render_hints};

const SIDEBAR_WIDTH: u16 = 30;

pub fn render_dashboard(frame: &mut Frame, dash: &DashboardState, area: Rect) {
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(area);

    render_sidebar(frame, dash, sidebar);

    let [header, content, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(main);

    render_header(frame, &dash.user, header);

    let panel = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(format!(" {} ", section_title(dash.active)))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    let inner = panel.inner(content);
    frame.render_widget(panel, content);
    frame.render_widget(
        Paragraph::new(section_lines(dash.active, &dash.user)).wrap(Wrap { trim: false }),
        Rect::new(
            inner.x + 1,
            inner.y + 1,
            inner.width.saturating_sub(2),
            inner.height.saturating_sub(1),
        ),
    );

    render_hints(
        frame,
        footer,
        &[
            InputHint::new("↑↓", "move"),
            InputHint::new("1-6", "section"),
            InputHint::new("Ctrl+L", "log out"),
            InputHint::new("Ctrl+C", "quit"),
        ],
        ACCENT,
    );
}

fn render_sidebar(frame: &mut Frame, dash: &DashboardState, area: Rect) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(MUTED));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let inner = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );

    let [brand, _, menu, _, logout] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(Section::ALL.len() as u16),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("♫ ", Style::default().fg(ACCENT)),
                Span::styled(
                    "NIGHTVOLT",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled("artist portal", Style::default().fg(MUTED))),
        ]),
        brand,
    );

    let width = usize::from(menu.width);
    let lines: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let text = truncate_with_ellipsis(
                &format!(" {} {}", section.icon(), section.label()),
                width,
            );
            let text = format!("{text:<width$}");
            let style = if *section == dash.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else if i == dash.cursor {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), menu);
    dash.menu_area.set(menu);

    let focused = dash.cursor == LOGOUT_INDEX;
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(DANGER)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DANGER)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" ⏻ Log out ", style))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DANGER)),
        ),
        logout,
    );
    dash.logout_area.set(logout);
}

fn render_header(frame: &mut Frame, user: &User, area: Rect) {
    let line = Line::from(vec![
        Span::styled(user.email.clone(), Style::default().fg(Color::White)),
        Span::styled(format!("  [{}]", user.role), Style::default().fg(MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

fn section_title(section: Section) -> &'static str {
    match section {
        Section::Fix => "Needs fixing",
        other => other.label(),
    }
}

/// Content of the panel for `section`.
///
/// Only `Profile` reads the user record.
pub fn section_lines(section: Section, user: &User) -> Vec<Line<'static>> {
    match section {
        Section::Upload => upload_lines(),
        Section::Releases => releases_lines(),
        Section::Moderation => empty_state_lines("◷", "No releases under moderation"),
        Section::Fix => empty_state_lines("✓", "All releases are in order"),
        Section::Support => support_lines(),
        Section::Profile => profile_lines(user),
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
}

fn button(icon: &str, text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[{icon}] "), Style::default().fg(ACCENT)),
        Span::styled(text.to_string(), Style::default().fg(Color::White)),
    ])
}

fn empty_state_lines(icon: &str, message: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            icon.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(MUTED)))
            .alignment(Alignment::Center),
    ]
}

fn upload_lines() -> Vec<Line<'static>> {
    empty_state_lines("↑", "The release upload form will appear here")
}

fn releases_lines() -> Vec<Line<'static>> {
    vec![
        button("+", "New release"),
        Line::from(""),
        Line::from(vec![
            Span::styled("♫ ", Style::default().fg(ACCENT)),
            Span::styled(
                "Release title",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled("  Single • 2025", Style::default().fg(MUTED))),
        Line::from(Span::styled(
            "  Published",
            Style::default().fg(Color::Green),
        )),
    ]
}

fn support_lines() -> Vec<Line<'static>> {
    vec![
        heading("Contact us"),
        Line::from(Span::styled(
            "We answer within 24 hours",
            Style::default().fg(MUTED),
        )),
        Line::from(""),
        button("✉", "support@nightvolt.app"),
        button("✈", "Telegram support"),
    ]
}

fn profile_lines(user: &User) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", user.avatar_initial()),
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                user.email.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Label: {}", user.label),
            Style::default().fg(MUTED),
        )),
        Line::from(Span::styled(
            format!("UID: {}", user.uid),
            Style::default().fg(MUTED),
        )),
        Line::from(""),
        button("◎", "Change profile photo"),
        button("✎", "Edit biography"),
        button("⚭", "Add social links"),
    ]
}
