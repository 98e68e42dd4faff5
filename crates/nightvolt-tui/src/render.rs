//! Root view: draws the mounted screen, then notifications on top.

use ratatui::Frame;

use crate::features::dashboard::render_dashboard;
use crate::features::login::render_login;
use crate::features::notifications::render_notifications;
use crate::state::{AppState, Screen};

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    match &app.screen {
        Screen::Login(login) => render_login(frame, login, area, app.spinner_frame),
        Screen::Dashboard(dash) => render_dashboard(frame, dash, area),
    }

    render_notifications(frame, &app.notifications, area);
}
