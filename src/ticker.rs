use crate::tracker::Tracker;
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{Instant, interval_at},
};
use tracing::debug;

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub type SharedTracker = Arc<Mutex<Tracker>>;

/// Owns the repeating one-second task that drives a running rest timer.
#[derive(Debug, Default)]
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Replaces any previous task with a fresh one.
    pub fn arm(&mut self, tracker: SharedTracker) {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            loop {
                interval.tick().await;
                let mut guard = tracker.lock().await;
                if !guard.tick() {
                    debug!("ticker stopped");
                    return;
                }
                debug!(remaining = guard.timer().remaining_secs(), "tick");
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Call with the tracker lock held, around a state change.
    pub fn follow(&mut self, was_running: bool, running: bool, tracker: &SharedTracker) {
        match (was_running, running) {
            (false, true) => self.arm(Arc::clone(tracker)),
            (_, false) => self.cancel(),
            (true, true) => {}
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
