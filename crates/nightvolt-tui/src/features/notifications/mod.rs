//! Transient toast notifications.

mod render;
mod state;

pub use render::render_notifications;
pub use state::{Notification, NotificationsState, Variant};
