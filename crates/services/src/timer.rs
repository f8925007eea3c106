use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

/// Emits one unit per `period` on a channel while running.
///
/// At most one ticking task exists at a time; resuming a running driver does
/// nothing, and pausing drops the task so no tick is delivered while paused.
pub struct CountdownDriver {
    period: Duration,
    ticks: UnboundedSender<()>,
    task: Option<JoinHandle<()>>,
}

impl CountdownDriver {
    #[must_use]
    pub fn new(period: Duration) -> (Self, UnboundedReceiver<()>) {
        let (ticks, rx) = mpsc::unbounded_channel();
        (
            Self {
                period,
                ticks,
                task: None,
            },
            rx,
        )
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Start ticking. The first tick arrives one period from now.
    ///
    /// Must be called within a tokio runtime. Returns false if already running.
    pub fn resume(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        let period = self.period;
        let ticks = self.ticks.clone();
        self.task = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(()).is_err() {
                    break;
                }
            }
        }));
        debug!(?period, "countdown driver resumed");
        true
    }

    /// Stop ticking. Returns false if nothing was running.
    pub fn pause(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                debug!("countdown driver paused");
                true
            }
            None => false,
        }
    }

    /// Alias for [`CountdownDriver::pause`]; the driver can be resumed later.
    pub fn stop(&mut self) -> bool {
        self.pause()
    }
}

impl Drop for CountdownDriver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
