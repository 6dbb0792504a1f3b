//! Transient notification state
//!
//! At most one notification is visible at a time: showing a new one
//! unconditionally replaces the current one. Removal happens in two phases
//! so the exit transition can play: `begin_dismiss` marks the notification
//! as leaving, `finish_dismiss` drops it once the transition duration has
//! elapsed. Both phases are guarded by the notification id, which makes
//! repeated dismissals and stale auto-dismiss timers no-ops.

/// How long a notification stays up before dismissing itself.
pub const AUTO_DISMISS_MS: u32 = 5000;
/// Exit transition duration before the element is removed.
pub const EXIT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Info => "\u{2139}",    // ℹ
            NotificationKind::Success => "\u{2713}", // ✓
            NotificationKind::Error => "\u{26A0}",   // ⚠
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "bg-blue-600",
            NotificationKind::Success => "bg-green-600",
            NotificationKind::Error => "bg-red-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub leaving: bool,
}

/// Single-slot notification presenter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presenter {
    next_id: u64,
    current: Option<Notification>,
}

impl Presenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replaces any visible notification and returns the new one's id, for
    /// scheduling its auto-dismissal.
    pub fn show(&mut self, message: String, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Notification {
            id,
            message,
            kind,
            leaving: false,
        });
        id
    }

    /// Starts the exit transition. Returns `true` only the first time for a
    /// given live notification; the caller schedules `finish_dismiss` on
    /// `true` and does nothing otherwise.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(notification) if notification.id == id && !notification.leaving => {
                notification.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Removes the notification once its exit transition has played.
    pub fn finish_dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}
