use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{Notification, NotificationsState, Variant};
use crate::common::widgets::{ACCENT, DANGER, render_card};
use crate::common::wrap_lines;

const TOAST_WIDTH: u16 = 44;
/// Description rows before the text is cut with an ellipsis.
const MAX_BODY_LINES: usize = 4;

/// Stacks notifications in the top-right corner, newest on top.
///
/// Each toast grows with its wrapped description, up to `MAX_BODY_LINES`.
pub fn render_notifications(frame: &mut Frame, state: &NotificationsState, area: Rect) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);
    let mut y = area.y + 1;

    for notification in state.iter().collect::<Vec<_>>().into_iter().rev() {
        let body = body_lines(notification, width);
        let height = body.len().max(1) as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }
        let toast_area = Rect::new(x, y, width, height);
        let color = match notification.variant {
            Variant::Normal => ACCENT,
            Variant::Destructive => DANGER,
        };
        let inner = render_card(frame, toast_area, &notification.title, color);
        let lines: Vec<Line> = body
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::White))))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
        y += height;
    }
}

fn body_lines(notification: &Notification, toast_width: u16) -> Vec<String> {
    let inner_width = toast_width.saturating_sub(2) as usize;
    wrap_lines(&notification.description, inner_width, MAX_BODY_LINES)
}
