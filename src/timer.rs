//! Rest timer state machine.
//!
//! The timer has no thread of its own: `Ticker` calls `tick()` once per
//! second while the timer is running.
//!
//! ```text
//! Idle --start--> Running --pause/reset/select_preset--> Idle
//!                 Running --tick reaches 0--> Idle (preset reloaded)
//! ```

use serde::Serialize;

pub const COMPLETION_MESSAGE: &str = "¡Tiempo de descanso terminado!";
pub const BANNER_DISMISS_MS: u64 = 3000;
pub const VIBRATION_PATTERN: [u32; 3] = [200, 100, 200];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestTimer {
    remaining_secs: u32,
    running: bool,
    preset: Option<u32>,
}

/// Returned by `tick()` when the countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion;

impl RestTimer {
    pub fn new(initial_secs: u32) -> Self {
        Self {
            remaining_secs: initial_secs,
            running: false,
            preset: None,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn preset(&self) -> Option<u32> {
        self.preset
    }

    pub fn select_preset(&mut self, secs: u32) {
        self.preset = Some(secs);
        self.remaining_secs = secs;
        self.running = false;
    }

    /// Returns false when the timer was already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.running = false;
        if let Some(secs) = self.preset {
            self.remaining_secs = secs;
        }
    }

    pub fn tick(&mut self) -> Option<Completion> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }
        self.reset();
        Some(Completion)
    }

    pub fn minutes(&self) -> String {
        format!("{:02}", self.remaining_secs / 60)
    }

    pub fn seconds(&self) -> String {
        format!("{:02}", self.remaining_secs % 60)
    }

    pub fn display(&self) -> String {
        format!("{}:{}", self.minutes(), self.seconds())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlertKind {
    Native,
    Banner {
        dismiss_after_ms: u64,
        vibrate: [u32; 3],
    },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub message: &'static str,
    pub kind: AlertKind,
}

impl Alert {
    /// Native notification when the page has permission, in-page banner otherwise.
    pub fn completion(id: u64, notifications_granted: bool) -> Self {
        let kind = if notifications_granted {
            AlertKind::Native
        } else {
            AlertKind::Banner {
                dismiss_after_ms: BANNER_DISMISS_MS,
                vibrate: VIBRATION_PATTERN,
            }
        };
        Self {
            id,
            message: COMPLETION_MESSAGE,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_default() {
        let timer = RestTimer::new(90);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_secs(), 90);
        assert_eq!(timer.preset(), None);
        assert_eq!(timer.display(), "01:30");
    }

    #[test]
    fn preset_countdown_reloads_and_completes_once() {
        let mut timer = RestTimer::new(90);
        timer.select_preset(60);
        assert!(timer.start());

        let completions = (0..60).filter_map(|_| timer.tick()).count();
        assert_eq!(completions, 1);
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_secs(), 60);

        assert_eq!(timer.tick(), None);
    }

    #[test]
    fn completion_without_preset_stays_at_zero() {
        let mut timer = RestTimer::new(2);
        timer.start();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.tick(), Some(Completion));
        assert_eq!(timer.remaining_secs(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn start_twice_is_a_no_op() {
        let mut timer = RestTimer::new(90);
        assert!(timer.start());
        assert!(!timer.start());
        assert!(timer.is_running());
    }

    #[test]
    fn pause_keeps_remaining() {
        let mut timer = RestTimer::new(90);
        timer.start();
        timer.tick();
        timer.tick();
        timer.pause();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_secs(), 88);
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_secs(), 88);
    }

    #[test]
    fn reset_reloads_selected_preset() {
        let mut timer = RestTimer::new(90);
        timer.select_preset(120);
        timer.start();
        timer.tick();
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_secs(), 120);
    }

    #[test]
    fn reset_without_preset_leaves_remaining() {
        let mut timer = RestTimer::new(90);
        timer.start();
        timer.tick();
        timer.reset();
        assert_eq!(timer.remaining_secs(), 89);
    }

    #[test]
    fn selecting_preset_cancels_running() {
        let mut timer = RestTimer::new(90);
        timer.start();
        timer.select_preset(30);
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "00:30");
    }

    #[test]
    fn display_pads_both_fields() {
        let mut timer = RestTimer::new(0);
        timer.select_preset(605);
        assert_eq!(timer.minutes(), "10");
        assert_eq!(timer.seconds(), "05");
    }

    #[test]
    fn alert_kind_follows_permission() {
        assert_eq!(Alert::completion(1, true).kind, AlertKind::Native);
        assert_eq!(
            Alert::completion(2, false).kind,
            AlertKind::Banner {
                dismiss_after_ms: 3000,
                vibrate: [200, 100, 200],
            }
        );
    }
}
