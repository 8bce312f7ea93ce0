use crate::ticker::{SharedTracker, Ticker};
use crate::tracker::Tracker;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub tracker: SharedTracker,
    pub ticker: Arc<Mutex<Ticker>>,
}

impl AppState {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            ticker: Arc::new(Mutex::new(Ticker::default())),
        }
    }
}
