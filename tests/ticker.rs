use chrono::NaiveDate;
use gym_tracker::consistency::WorkoutLog;
use gym_tracker::exercises::Weights;
use gym_tracker::ticker::{SharedTracker, Ticker};
use gym_tracker::tracker::Command;
use gym_tracker::{Config, Store, Tracker};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
}

fn shared_tracker() -> SharedTracker {
    let tracker = Tracker::new(
        Store::new(std::env::temp_dir()),
        &Config::default(),
        Weights::new(),
        WorkoutLog::default(),
    );
    Arc::new(Mutex::new(tracker))
}

async fn run(shared: &SharedTracker, ticker: &mut Ticker, command: Command) {
    let mut tracker = shared.lock().await;
    let was_running = tracker.timer().is_running();
    tracker.dispatch(command, today()).await.unwrap();
    let running = tracker.timer().is_running();
    ticker.follow(was_running, running, shared);
}

#[tokio::test(start_paused = true)]
async fn ticker_runs_countdown_to_completion_once() {
    let shared = shared_tracker();
    let mut ticker = Ticker::default();

    run(&shared, &mut ticker, Command::SelectPreset { seconds: 3 }).await;
    run(&shared, &mut ticker, Command::StartTimer).await;
    assert!(ticker.is_armed());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(shared.lock().await.timer().remaining_secs(), 2);

    tokio::time::sleep(Duration::from_secs(5)).await;
    let tracker = shared.lock().await;
    assert!(!tracker.timer().is_running());
    assert_eq!(tracker.timer().remaining_secs(), 3);
    assert_eq!(tracker.last_alert().map(|alert| alert.id), Some(1));
    drop(tracker);
    assert!(!ticker.is_armed());
}

#[tokio::test(start_paused = true)]
async fn pause_cancels_ticks() {
    let shared = shared_tracker();
    let mut ticker = Ticker::default();

    run(&shared, &mut ticker, Command::StartTimer).await;
    tokio::time::sleep(Duration::from_millis(2500)).await;
    run(&shared, &mut ticker, Command::PauseTimer).await;
    assert!(!ticker.is_armed());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(shared.lock().await.timer().remaining_secs(), 88);
}

#[tokio::test(start_paused = true)]
async fn start_while_running_keeps_single_task() {
    let shared = shared_tracker();
    let mut ticker = Ticker::default();

    run(&shared, &mut ticker, Command::StartTimer).await;
    tokio::time::sleep(Duration::from_millis(500)).await;
    run(&shared, &mut ticker, Command::StartTimer).await;
    tokio::time::sleep(Duration::from_secs(3)).await;

    assert_eq!(shared.lock().await.timer().remaining_secs(), 87);
}

#[tokio::test(start_paused = true)]
async fn reset_cancels_ticks() {
    let shared = shared_tracker();
    let mut ticker = Ticker::default();

    run(&shared, &mut ticker, Command::SelectPreset { seconds: 60 }).await;
    run(&shared, &mut ticker, Command::StartTimer).await;
    tokio::time::sleep(Duration::from_millis(2500)).await;
    assert_eq!(shared.lock().await.timer().remaining_secs(), 58);

    run(&shared, &mut ticker, Command::ResetTimer).await;
    assert!(!ticker.is_armed());

    tokio::time::sleep(Duration::from_secs(10)).await;
    let tracker = shared.lock().await;
    assert!(!tracker.timer().is_running());
    assert_eq!(tracker.timer().remaining_secs(), 60);
}

#[tokio::test(start_paused = true)]
async fn selecting_preset_while_running_cancels_ticks() {
    let shared = shared_tracker();
    let mut ticker = Ticker::default();

    run(&shared, &mut ticker, Command::StartTimer).await;
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(shared.lock().await.timer().remaining_secs(), 89);

    run(&shared, &mut ticker, Command::SelectPreset { seconds: 45 }).await;
    assert!(!ticker.is_armed());

    tokio::time::sleep(Duration::from_secs(10)).await;
    let tracker = shared.lock().await;
    assert!(!tracker.timer().is_running());
    assert_eq!(tracker.timer().remaining_secs(), 45);
}
