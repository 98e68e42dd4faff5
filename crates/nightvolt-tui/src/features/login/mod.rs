//! Login screen: two role tabs sharing one parameterized submit.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{Field, FieldHint, Focus, LoginForm, LoginState, PendingLogin};
pub use update::{
    LoginOutcome, handle_key, handle_login_result, handle_paste, outcome_notification, submit,
};
