//! Dashboard: six-section sidebar and the panel it selects.

mod render;
mod state;
mod update;

pub use render::{render_dashboard, section_lines};
pub use state::{DashboardState, LOGOUT_INDEX, Section};
pub use update::{DashboardAction, handle_key, handle_mouse};
