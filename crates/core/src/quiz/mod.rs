mod countdown;
mod effect;
mod keyboard;
mod session;
mod submission;

pub use countdown::{
    AUTO_SUBMIT_DELAY, Countdown, CountdownState, LOW_TIME_SECS, TICK_INTERVAL, TickOutcome,
    TimerTone, WARNING_AT_SECS, format_remaining,
};
pub use effect::{Effect, NavButtons, NavMarker, PrimaryAction};
pub use keyboard::{KeyCode, KeyInput, KeyModifiers, Shortcut, shortcut_for};
pub use session::{LEAVE_WARNING, QuizAction, QuizSession, QuizStats};
pub use submission::{Submission, field_name};
