mod animation;
mod cards;
mod charts;
mod filter;
mod refresh;
mod teacher;

pub use animation::{COUNTER_DURATION, COUNTER_FRAME, CounterAnimation, FILL_DELAY, ProgressFill};
pub use cards::{CardElevation, REVEAL_CLASS, REVEAL_THRESHOLD, RevealTracker};
pub use charts::{ChartSeries, format_date, format_score};
pub use filter::{CategoryFilter, FilterBar};
pub use refresh::{AUTO_REFRESH_INTERVAL, MANUAL_REFRESH_DELAY, RefreshController};
pub use teacher::{
    ClassAction, DetailPanel, DetailRequest, PanelState, SubjectRow, subject_rows,
};
