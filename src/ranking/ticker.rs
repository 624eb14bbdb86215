use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use crate::ranking::countdown::{time_until_reset, Countdown};

/// How often a running view refreshes the reset countdown.
pub const DEFAULT_TICK: Duration = Duration::from_secs(60);

/// Keeps the reset countdown fresh while a view is open.
///
/// The countdown is recomputed right away and then once per period on a tokio
/// task. Dropping the ticker cancels the task.
///
/// ```no_run
/// # async fn example() {
/// use league_board::ranking::{CountdownTicker, DEFAULT_TICK};
///
/// let ticker = CountdownTicker::spawn(DEFAULT_TICK);
/// println!("reset in {}", ticker.current());
/// # }
/// ```
pub struct CountdownTicker {
    receiver: watch::Receiver<Countdown>,
    task: JoinHandle<()>,
}

impl CountdownTicker {
    /// Start ticking against the system clock. Must be called inside a tokio runtime.
    pub fn spawn(period: Duration) -> Self {
        Self::spawn_with_clock(period, Utc::now)
    }

    /// Start ticking against a caller-supplied clock.
    pub fn spawn_with_clock<F>(period: Duration, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + 'static,
    {
        let period = if period.is_zero() { DEFAULT_TICK } else { period };
        let (sender, receiver) = watch::channel(time_until_reset(clock()));

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let countdown = time_until_reset(clock());
                trace!(%countdown, "countdown tick");
                if sender.send(countdown).is_err() {
                    break;
                }
            }
        });
        debug!(?period, "countdown ticker started");

        Self { receiver, task }
    }

    /// The most recently computed countdown.
    pub fn current(&self) -> Countdown {
        *self.receiver.borrow()
    }

    /// A receiver that is notified on every tick.
    pub fn subscribe(&self) -> watch::Receiver<Countdown> {
        self.receiver.clone()
    }

    /// Stop ticking. Same as dropping the ticker.
    pub fn stop(self) {}
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.task.abort();
        debug!("countdown ticker stopped");
    }
}
