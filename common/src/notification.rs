/// How long a banner stays on screen unless dismissed earlier.
pub const DISPLAY_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// The single banner slot. There is no queue: `show` replaces whatever is
/// displayed and bumps the generation so the expiry timer armed for the old
/// banner cannot clear the new one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    generation: u64,
}

impl NotificationSlot {
    /// Displays `notification` and returns the generation to pass to
    /// `expire` once `DISPLAY_MS` has elapsed.
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.generation += 1;
        self.current = Some(notification);
        self.generation
    }

    /// Clears the banner only if it is still the one shown at `generation`.
    /// Returns whether anything changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notification_replaces_current() {
        let mut slot = NotificationSlot::default();
        slot.show(Notification::success("Saved"));
        slot.show(Notification::error("Failed"));
        assert_eq!(slot.current(), Some(&Notification::error("Failed")));
    }

    #[test]
    fn stale_timer_does_not_clear_replacement() {
        let mut slot = NotificationSlot::default();
        let first = slot.show(Notification::success("Saved"));
        let second = slot.show(Notification::error("Failed"));

        assert!(!slot.expire(first));
        assert!(slot.current().is_some());
        assert!(slot.expire(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn manual_dismissal_clears_early() {
        let mut slot = NotificationSlot::default();
        let generation = slot.show(Notification::success("Saved"));
        assert!(slot.dismiss());
        assert!(!slot.dismiss());
        assert!(!slot.expire(generation));
    }
}
