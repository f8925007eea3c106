use std::time::Duration;

use crate::model::{Notification, NotificationLevel};

/// Simulated latency of a manual refresh.
pub const MANUAL_REFRESH_DELAY: Duration = Duration::from_secs(2);
/// Interval of the background refresh.
pub const AUTO_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

const REFRESHED_NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Guards the refresh button so only one refresh is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshController {
    in_flight: bool,
    completed: u32,
}

impl RefreshController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables the button. Returns false if a refresh is already running.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Re-enables the button and yields the success notice.
    pub fn finish(&mut self) -> Option<Notification> {
        if !self.in_flight {
            return None;
        }
        self.in_flight = false;
        self.completed += 1;
        Some(Notification::new(
            "Dashboard data refreshed successfully!",
            NotificationLevel::Success,
            REFRESHED_NOTICE_DURATION,
        ))
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn button_disabled(&self) -> bool {
        self.in_flight
    }

    /// Finished refreshes; bumping it re-keys the progress bars.
    #[must_use]
    pub fn completed(&self) -> u32 {
        self.completed
    }
}
