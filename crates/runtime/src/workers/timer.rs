//! Countdown worker driving the turn clock.
//!
//! The session worker publishes the generation of the live turn through a
//! watch channel (`None` while no game is running). Each new generation
//! restarts the interval so every turn gets a full first second.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace};

/// One elapsed interval, stamped with the turn it was measured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub generation: u64,
}

pub struct TimerWorker {
    period: Duration,
    control_rx: watch::Receiver<Option<u64>>,
    tick_tx: mpsc::Sender<TimerTick>,
}

impl TimerWorker {
    pub fn new(
        period: Duration,
        control_rx: watch::Receiver<Option<u64>>,
        tick_tx: mpsc::Sender<TimerTick>,
    ) -> Self {
        Self {
            period,
            control_rx,
            tick_tx,
        }
    }

    /// Runs until the session worker drops either end.
    pub async fn run(mut self) {
        loop {
            let active = *self.control_rx.borrow_and_update();
            let keep_going = match active {
                Some(generation) => self.count(generation).await,
                None => {
                    debug!(target: "runtime::timer", "Timer suspended");
                    self.control_rx.changed().await.is_ok()
                }
            };
            if !keep_going {
                break;
            }
        }
        debug!(target: "runtime::timer", "Timer worker stopped");
    }

    /// Ticks for `generation` until the control value changes.
    async fn count(&mut self, generation: u64) -> bool {
        debug!(target: "runtime::timer", generation, "Timer running");
        let mut interval = tokio::time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = self.control_rx.changed() => return changed.is_ok(),
                _ = interval.tick() => {
                    trace!(target: "runtime::timer", generation, "Tick");
                    if self.tick_tx.send(TimerTick { generation }).await.is_err() {
                        return false;
                    }
                }
            }
        }
    }
}
