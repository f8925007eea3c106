use std::time::Duration;

/// Total run time of a counter animation.
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);
/// Frame interval of a counter animation.
pub const COUNTER_FRAME: Duration = Duration::from_millis(16);
/// Delay before a reset progress bar starts filling.
pub const FILL_DELAY: Duration = Duration::from_millis(100);

const FILL_TRANSITION: &str = "width 1s ease-in-out";

/// Counts a tile from zero up to its target.
///
/// Each frame adds `target / (2000 / 16)`; the displayed value is the floor,
/// clamped at the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: u64) -> Self {
        let frames = COUNTER_DURATION.as_secs_f64() / COUNTER_FRAME.as_secs_f64();
        #[allow(clippy::cast_precision_loss)]
        let step = target as f64 / frames;
        Self { target, step }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        COUNTER_FRAME
    }

    /// Value displayed after `frames` frames.
    #[must_use]
    pub fn value_after_frames(&self, frames: u32) -> u64 {
        let raw = self.step * f64::from(frames);
        #[allow(clippy::cast_precision_loss)]
        let ceiling = self.target as f64;
        if raw >= ceiling {
            return self.target;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let shown = raw.floor() as u64;
        shown.min(self.target)
    }

    /// Displayed values, one per frame, ending at the target.
    pub fn frames(&self) -> impl Iterator<Item = u64> + '_ {
        let mut done = false;
        (1u32..).map_while(move |frame| {
            if done {
                return None;
            }
            let value = self.value_after_frames(frame);
            done = value >= self.target;
            Some(value)
        })
    }
}

/// Two-phase width animation of a progress bar.
#[derive(Clone, Debug, PartialEq)]
pub enum ProgressFill {
    /// Width forced to zero, no transition.
    Reset,
    /// Transitioning to the target width.
    Filling { percent: f64 },
}

impl ProgressFill {
    /// Inline style for the bar element.
    #[must_use]
    pub fn style(&self) -> String {
        match self {
            ProgressFill::Reset => "width: 0%;".to_string(),
            ProgressFill::Filling { percent } => {
                format!(
                    "width: {}%; transition: {FILL_TRANSITION};",
                    percent.clamp(0.0, 100.0)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_reaches_target_in_about_125_frames() {
        let counter = CounterAnimation::new(250);
        assert_eq!(counter.value_after_frames(0), 0);
        assert_eq!(counter.value_after_frames(1), 2);
        assert_eq!(counter.value_after_frames(125), 250);
        assert_eq!(counter.value_after_frames(500), 250);

        let frames: Vec<_> = counter.frames().collect();
        assert_eq!(frames.len(), 125);
        assert_eq!(frames.last(), Some(&250));
        assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn small_targets_floor_to_zero_early() {
        let counter = CounterAnimation::new(3);
        assert_eq!(counter.value_after_frames(10), 0);
        assert_eq!(counter.value_after_frames(42), 1);
        assert_eq!(counter.frames().last(), Some(3));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let counter = CounterAnimation::new(0);
        assert_eq!(counter.frames().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn fill_styles() {
        assert_eq!(ProgressFill::Reset.style(), "width: 0%;");
        assert_eq!(
            ProgressFill::Filling { percent: 72.5 }.style(),
            "width: 72.5%; transition: width 1s ease-in-out;"
        );
        assert_eq!(
            ProgressFill::Filling { percent: 140.0 }.style(),
            "width: 100%; transition: width 1s ease-in-out;"
        );
    }
}
