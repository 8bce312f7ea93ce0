use crate::config::Config;
use crate::consistency::{CalendarCell, ConsistencySummary, WEEKDAY_HEADERS, WorkoutLog};
use crate::errors::AppError;
use crate::exercises::{self, ExerciseKey, ExerciseRow, Weights};
use crate::routine;
use crate::storage::{Store, StoreKey};
use crate::timer::{Alert, RestTimer};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Routine,
    Timer,
    Consistency,
}

/// Every action the page can take.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    SelectTab { tab: Tab },
    SelectDay { day: u8 },
    /// `seq` orders edits from one page; an edit older than the last one
    /// applied to the same key is ignored.
    SetWeight {
        key: String,
        value: String,
        #[serde(default)]
        seq: Option<u64>,
    },
    SelectPreset { seconds: u32 },
    StartTimer,
    PauseTimer,
    ResetTimer,
    MarkWorkout,
    SetNotificationPermission { granted: bool },
}

#[derive(Debug, Clone, Serialize)]
pub struct TimerView {
    pub minutes: String,
    pub seconds: String,
    pub remaining_secs: u32,
    pub running: bool,
    pub preset: Option<u32>,
    pub presets: Vec<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub today: NaiveDate,
    pub tab: Tab,
    pub day: u8,
    pub days: Vec<u8>,
    pub exercises: Vec<ExerciseRow>,
    pub timer: TimerView,
    pub alert: Option<Alert>,
    pub stats: ConsistencySummary,
    pub weekday_headers: [&'static str; 7],
    pub calendar: Vec<CalendarCell>,
}

/// All application state, owned by one instance.
#[derive(Debug)]
pub struct Tracker {
    store: Store,
    weights: Weights,
    weight_seqs: HashMap<String, u64>,
    workouts: WorkoutLog,
    timer: RestTimer,
    presets: Vec<u32>,
    week_goal: usize,
    current_day: u8,
    tab: Tab,
    notifications_granted: bool,
    alert_seq: u64,
    last_alert: Option<Alert>,
}

impl Tracker {
    pub fn new(store: Store, config: &Config, weights: Weights, workouts: WorkoutLog) -> Self {
        Self {
            store,
            weights,
            weight_seqs: HashMap::new(),
            workouts,
            timer: RestTimer::new(config.timer_default_secs),
            presets: config.presets.clone(),
            week_goal: config.weekly_goal,
            current_day: 1,
            tab: Tab::default(),
            notifications_granted: false,
            alert_seq: 0,
            last_alert: None,
        }
    }

    pub async fn load(store: Store, config: &Config) -> Self {
        let weights: Weights = store.load(StoreKey::Weights).await;
        let workouts: WorkoutLog = store.load(StoreKey::Workouts).await;
        info!(
            weights = weights.len(),
            workouts = workouts.len(),
            "loaded tracker data from {}",
            store.dir().display()
        );
        Self::new(store, config, weights, workouts)
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn workouts(&self) -> &WorkoutLog {
        &self.workouts
    }

    pub fn timer(&self) -> &RestTimer {
        &self.timer
    }

    pub fn last_alert(&self) -> Option<&Alert> {
        self.last_alert.as_ref()
    }

    pub async fn dispatch(&mut self, command: Command, today: NaiveDate) -> Result<(), AppError> {
        match command {
            Command::SelectTab { tab } => self.tab = tab,
            Command::SelectDay { day } => self.select_day(day)?,
            Command::SetWeight { key, value, seq } => self.set_weight(&key, &value, seq).await?,
            Command::SelectPreset { seconds } => {
                if seconds == 0 {
                    return Err(AppError::bad_request("preset must be at least one second"));
                }
                self.timer.select_preset(seconds);
            }
            Command::StartTimer => {
                if self.timer.start() {
                    debug!(remaining = self.timer.remaining_secs(), "timer started");
                }
            }
            Command::PauseTimer => self.timer.pause(),
            Command::ResetTimer => self.timer.reset(),
            Command::MarkWorkout => self.mark_workout(today).await?,
            Command::SetNotificationPermission { granted } => {
                self.notifications_granted = granted;
            }
        }
        Ok(())
    }

    /// Advances the rest timer by one second. Returns whether it is still running.
    pub fn tick(&mut self) -> bool {
        if self.timer.tick().is_some() {
            self.alert_seq += 1;
            let alert = Alert::completion(self.alert_seq, self.notifications_granted);
            info!(alert = alert.id, "rest timer finished");
            self.last_alert = Some(alert);
        }
        self.timer.is_running()
    }

    pub fn view(&self, today: NaiveDate) -> View {
        View {
            today,
            tab: self.tab,
            day: self.current_day,
            days: (1..=routine::DAY_COUNT).collect(),
            exercises: exercises::render(self.current_day, &self.weights),
            timer: TimerView {
                minutes: self.timer.minutes(),
                seconds: self.timer.seconds(),
                remaining_secs: self.timer.remaining_secs(),
                running: self.timer.is_running(),
                preset: self.timer.preset(),
                presets: self.presets.clone(),
            },
            alert: self.last_alert.clone(),
            stats: self.workouts.summary(today, self.week_goal),
            weekday_headers: WEEKDAY_HEADERS,
            calendar: self.workouts.calendar(today),
        }
    }

    fn select_day(&mut self, day: u8) -> Result<(), AppError> {
        if !routine::is_valid_day(day) {
            return Err(AppError::bad_request(format!(
                "day must be between 1 and {}",
                routine::DAY_COUNT
            )));
        }
        self.current_day = day;
        Ok(())
    }

    async fn set_weight(
        &mut self,
        key: &str,
        value: &str,
        seq: Option<u64>,
    ) -> Result<(), AppError> {
        let key: ExerciseKey = key.parse().map_err(AppError::bad_request)?;
        if !key.exists() {
            return Err(AppError::bad_request(format!("no exercise at {key}")));
        }
        if let Some(seq) = seq {
            let last = self.weight_seqs.entry(key.to_string()).or_default();
            if seq <= *last {
                debug!(%key, seq, last = *last, "stale weight edit dropped");
                return Ok(());
            }
            *last = seq;
        }
        exercises::apply_weight(&mut self.weights, key, value);
        debug!(%key, value, "weight updated");
        self.store.save(StoreKey::Weights, &self.weights).await
    }

    async fn mark_workout(&mut self, today: NaiveDate) -> Result<(), AppError> {
        if !self.workouts.mark(today) {
            debug!(%today, "workout already marked");
            return Ok(());
        }
        info!(%today, "workout marked");
        self.store.save(StoreKey::Workouts, &self.workouts).await
    }
}
