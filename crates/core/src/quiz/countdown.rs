use std::time::Duration;

/// Remaining seconds at which the one-time warning fires.
pub const WARNING_AT_SECS: i64 = 300;
/// Remaining seconds below which the display turns amber.
pub const LOW_TIME_SECS: i64 = 600;
/// Delay between the time-up notice and the automatic submission.
pub const AUTO_SUBMIT_DELAY: Duration = Duration::from_secs(3);
/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownState {
    Running,
    Paused,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerTone {
    Normal,
    Low,
    Critical,
}

impl TimerTone {
    #[must_use]
    pub fn for_remaining(remaining_secs: i64) -> Self {
        if remaining_secs <= WARNING_AT_SECS {
            TimerTone::Critical
        } else if remaining_secs <= LOW_TIME_SECS {
            TimerTone::Low
        } else {
            TimerTone::Normal
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            TimerTone::Normal => "timer-normal",
            TimerTone::Low => "timer-low",
            TimerTone::Critical => "timer-critical",
        }
    }
}

/// What a single accepted tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    pub remaining_secs: i64,
    /// True only on the tick that lands on [`WARNING_AT_SECS`].
    pub warning: bool,
    /// True only on the first tick that reaches zero.
    pub expired: bool,
}

/// Quiz countdown. Starts paused; time only moves on ticks while running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: i64,
    state: CountdownState,
    warned: bool,
    expired: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(total_secs: u32) -> Self {
        Self {
            remaining_secs: i64::from(total_secs),
            state: CountdownState::Paused,
            warned: false,
            expired: false,
        }
    }

    #[must_use]
    pub fn remaining_secs(&self) -> i64 {
        self.remaining_secs
    }

    #[must_use]
    pub fn state(&self) -> CountdownState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    #[must_use]
    pub fn tone(&self) -> TimerTone {
        TimerTone::for_remaining(self.remaining_secs)
    }

    /// Advances one second. Returns `None` when the countdown is not running.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.is_running() {
            return None;
        }

        self.remaining_secs -= 1;

        let warning = self.remaining_secs == WARNING_AT_SECS && !self.warned;
        if warning {
            self.warned = true;
        }

        let mut expired = false;
        if self.remaining_secs <= 0 {
            self.state = CountdownState::Stopped;
            expired = !self.expired;
            self.expired = true;
        }

        Some(TickOutcome {
            remaining_secs: self.remaining_secs,
            warning,
            expired,
        })
    }

    /// Returns true if this call paused a running countdown.
    pub fn pause(&mut self) -> bool {
        if self.state == CountdownState::Running {
            self.state = CountdownState::Paused;
            return true;
        }
        false
    }

    /// Returns true if this call resumed a paused countdown with time left.
    pub fn resume(&mut self) -> bool {
        if self.state == CountdownState::Paused && self.remaining_secs > 0 {
            self.state = CountdownState::Running;
            return true;
        }
        false
    }

    /// Stops for good. Returns true if the countdown was not already stopped.
    pub fn stop(&mut self) -> bool {
        if self.state == CountdownState::Stopped {
            return false;
        }
        self.state = CountdownState::Stopped;
        true
    }
}

/// `MM:SS`, clamped at zero.
#[must_use]
pub fn format_remaining(remaining_secs: i64) -> String {
    let secs = remaining_secs.max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
