use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_with_ellipsis;

/// Accent used for brand text, focus borders and the active menu entry.
pub const ACCENT: Color = Color::Magenta;
/// Secondary accent (admin tab, destructive actions).
pub const DANGER: Color = Color::Red;
pub const MUTED: Color = Color::DarkGray;

const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
/// Ticks per spinner frame.
pub const SPINNER_SPEED_DIVISOR: usize = 2;

pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[(frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len()]
}

/// Returns a rect of at most `width` x `height`, centered inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Clears `area` and draws a titled, bordered card. Returns the inner rect.
pub fn render_card(frame: &mut Frame, area: Rect, title: &str, border_color: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A labelled single-line text field.
pub struct InputField<'a> {
    pub label: &'a str,
    /// Text to draw (already masked for secrets).
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
}

/// Height consumed by `render_input_field` (label + bordered box).
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Renders a label line followed by a bordered input box.
pub fn render_input_field(frame: &mut Frame, area: Rect, field: &InputField<'_>) {
    if area.height < INPUT_FIELD_HEIGHT {
        return;
    }
    let label_area = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            field.label,
            Style::default().fg(Color::White),
        ))),
        label_area,
    );

    let border_color = if field.focused { ACCENT } else { MUTED };
    let box_area = Rect::new(area.x, area.y + 1, area.width, 3);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let max_text_width = inner.width.saturating_sub(1) as usize;
    let mut spans = Vec::new();
    if field.value.is_empty() {
        if field.focused {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }
        spans.push(Span::styled(
            truncate_with_ellipsis(field.placeholder, max_text_width),
            Style::default().fg(MUTED),
        ));
    } else {
        spans.push(Span::styled(
            tail_fit(field.value, max_text_width),
            Style::default().fg(Color::White),
        ));
        if field.focused {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Keeps the end of the text visible while typing past the box width.
fn tail_fit(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        return text.to_string();
    }
    text.chars().skip(count - max_chars).collect()
}

/// A keyboard hint shown in a footer line.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders a centered line of keyboard hints on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    if area.height == 0 {
        return;
    }
    let hints_y = area.y + area.height - 1;
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(MUTED)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(MUTED),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}
