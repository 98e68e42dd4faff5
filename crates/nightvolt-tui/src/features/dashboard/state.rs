use std::cell::Cell;

use nightvolt_core::User;
use ratatui::layout::Rect;

/// Dashboard menu entries, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    Upload,
    #[default]
    Releases,
    Moderation,
    Fix,
    Support,
    Profile,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Upload,
        Section::Releases,
        Section::Moderation,
        Section::Fix,
        Section::Support,
        Section::Profile,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Upload => "upload",
            Section::Releases => "releases",
            Section::Moderation => "moderation",
            Section::Fix => "fix",
            Section::Support => "support",
            Section::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Upload => "Upload release",
            Section::Releases => "My releases",
            Section::Moderation => "In moderation",
            Section::Fix => "Fix",
            Section::Support => "Support",
            Section::Profile => "Profile",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Upload => "↑",
            Section::Releases => "♫",
            Section::Moderation => "◷",
            Section::Fix => "!",
            Section::Support => "✉",
            Section::Profile => "●",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Sidebar cursor position: one of the menu entries, or the logout button
/// right after them.
pub const LOGOUT_INDEX: usize = Section::ALL.len();

/// Dashboard screen state. Created fresh on every sign-in.
#[derive(Debug)]
pub struct DashboardState {
    pub user: User,
    pub active: Section,
    /// Highlighted sidebar row (`0..=LOGOUT_INDEX`).
    pub cursor: usize,
    /// Menu list rect from the last frame, for mouse hit-testing.
    pub menu_area: Cell<Rect>,
    /// Logout button rect from the last frame.
    pub logout_area: Cell<Rect>,
}

impl DashboardState {
    pub fn new(user: User) -> Self {
        let active = Section::default();
        Self {
            user,
            active,
            cursor: active.index(),
            menu_area: Cell::new(Rect::default()),
            logout_area: Cell::new(Rect::default()),
        }
    }

    /// Makes `section` the active panel.
    pub fn select_section(&mut self, section: Section) {
        tracing::debug!(section = section.id(), "section selected");
        self.active = section;
        self.cursor = section.index();
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1).min(LOGOUT_INDEX);
    }

    /// The menu entry under a click at (`column`, `row`), if any.
    ///
    /// Each entry occupies one row of the recorded menu rect.
    pub fn section_at(&self, column: u16, row: u16) -> Option<Section> {
        let area = self.menu_area.get();
        if !contains(area, column, row) {
            return None;
        }
        Section::from_index(usize::from(row - area.y))
    }

    pub fn is_logout_at(&self, column: u16, row: u16) -> bool {
        contains(self.logout_area.get(), column, row)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
