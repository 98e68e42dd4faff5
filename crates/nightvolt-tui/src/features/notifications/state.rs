use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Most notifications kept on screen; older ones are pushed out.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Normal,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Normal,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }
}

#[derive(Debug)]
pub struct NotificationsState {
    items: VecDeque<(Notification, Instant)>,
    lifetime: Duration,
}

impl NotificationsState {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        tracing::debug!(title = %notification.title, "notification");
        self.items.push_back((notification, now));
        while self.items.len() > MAX_VISIBLE {
            self.items.pop_front();
        }
    }

    /// Drops notifications older than the configured lifetime.
    pub fn expire(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.items
            .retain(|(_, created)| now.saturating_duration_since(*created) < lifetime);
    }

    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().map(|(n, _)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_trims_to_limit() {
        let mut state = NotificationsState::new(Duration::from_secs(5));
        for i in 0..5 {
            state.push(Notification::normal(format!("n{i}"), ""));
        }
        let titles: Vec<_> = state.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["n2", "n3", "n4"]);
    }

    #[test]
    fn test_expire_drops_old_entries() {
        let mut state = NotificationsState::new(Duration::from_secs(5));
        let start = Instant::now();
        state.push_at(Notification::normal("old", ""), start);
        state.push_at(
            Notification::destructive("new", ""),
            start + Duration::from_secs(3),
        );

        state.expire(start + Duration::from_secs(6));

        let titles: Vec<_> = state.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["new"]);
    }

    #[test]
    fn test_dismiss_all() {
        let mut state = NotificationsState::new(Duration::from_secs(5));
        state.push(Notification::normal("a", "b"));
        state.dismiss_all();
        assert!(state.is_empty());
    }
}
