use std::time::Duration;

/// Default lifetime of a transient notification.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl NotificationLevel {
    /// CSS modifier used by the alert markup (`alert-<level>`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Danger => "danger",
        }
    }
}

/// A transient, dismissable message shown on top of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, level: NotificationLevel, duration: Duration) -> Self {
        Self {
            message: message.into(),
            level,
            duration,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, DEFAULT_NOTIFICATION_DURATION)
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success, DEFAULT_NOTIFICATION_DURATION)
    }

    #[must_use]
    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Danger, DEFAULT_NOTIFICATION_DURATION)
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}
