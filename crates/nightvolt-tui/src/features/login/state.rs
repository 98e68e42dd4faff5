use nightvolt_core::{Credentials, Role};

use crate::common::{TaskId, TaskState};

/// Focusable elements of a login form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The Artist / Admin tab bar.
    Tabs,
    #[default]
    Email,
    Password,
    Submit,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Tabs, Focus::Email, Focus::Password, Focus::Submit];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// Inline validation message shown under a field, like a browser's
/// constraint-validation bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHint {
    pub field: Field,
    pub message: &'static str,
}

/// Input state of one tab. Each tab keeps its own copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: Focus,
    pub hint: Option<FieldHint>,
}

impl LoginForm {
    /// The text buffer under the cursor, if the focus is on a field.
    pub fn focused_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Email => Some(&mut self.email),
            Focus::Password => Some(&mut self.password),
            Focus::Tabs | Focus::Submit => None,
        }
    }

    /// Checks the form the way a browser checks `required` + `type=email`.
    /// Surrounding whitespace in the email is ignored.
    ///
    /// On failure, focuses the offending field and returns its hint.
    pub fn validate(&mut self) -> Result<(), FieldHint> {
        let email = self.email.trim();
        let hint = if email.is_empty() {
            Some(FieldHint {
                field: Field::Email,
                message: "Please fill out this field.",
            })
        } else if !looks_like_email(email) {
            Some(FieldHint {
                field: Field::Email,
                message: "Please enter an email address.",
            })
        } else if self.password.is_empty() {
            Some(FieldHint {
                field: Field::Password,
                message: "Please fill out this field.",
            })
        } else {
            None
        };

        match hint {
            Some(hint) => {
                self.focus = match hint.field {
                    Field::Email => Focus::Email,
                    Field::Password => Focus::Password,
                };
                self.hint = Some(hint.clone());
                Err(hint)
            }
            None => {
                self.hint = None;
                Ok(())
            }
        }
    }

    pub fn credentials(&self, role: Role) -> Credentials {
        Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role,
        }
    }
}

/// `local@domain` with no whitespace: the shape an email input accepts.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// The sign-in request currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingLogin {
    pub task: TaskId,
    pub role: Role,
}

/// Login screen state. Created fresh whenever the screen is mounted.
#[derive(Debug, Default)]
pub struct LoginState {
    pub active: Role,
    pub artist: LoginForm,
    pub admin: LoginForm,
    /// One request at a time across both tabs.
    pub task: TaskState,
    pub pending_role: Option<Role>,
}

impl LoginState {
    pub fn form(&self, role: Role) -> &LoginForm {
        match role {
            Role::Artist => &self.artist,
            Role::Admin => &self.admin,
        }
    }

    pub fn form_mut(&mut self, role: Role) -> &mut LoginForm {
        match role {
            Role::Artist => &mut self.artist,
            Role::Admin => &mut self.admin,
        }
    }

    pub fn active_form(&self) -> &LoginForm {
        self.form(self.active)
    }

    pub fn active_form_mut(&mut self) -> &mut LoginForm {
        self.form_mut(self.active)
    }

    pub fn switch_tab(&mut self, role: Role) {
        self.active = role;
    }

    pub fn is_busy(&self) -> bool {
        self.task.is_running()
    }

    pub fn pending(&self) -> Option<PendingLogin> {
        match (self.task.active, self.pending_role) {
            (Some(task), Some(role)) => Some(PendingLogin { task, role }),
            _ => None,
        }
    }

    pub(crate) fn begin(&mut self, task: TaskId, role: Role) {
        self.task.start(task);
        self.pending_role = Some(role);
    }

    /// Ends the pending request if `task` is it. Returns false for stale ids.
    pub(crate) fn finish(&mut self, task: TaskId) -> bool {
        if self.task.finish_if_active(task) {
            self.pending_role = None;
            true
        } else {
            false
        }
    }
}
