use crate::errors::AppError;
use crate::exercises::{self, ExerciseRow};
use crate::routine;
use crate::state::AppState;
use crate::tracker::{Command, View};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use chrono::{Local, NaiveDate};

pub async fn index() -> Html<String> {
    Html(render_index(today()))
}

pub async fn get_state(State(state): State<AppState>) -> Json<View> {
    let tracker = state.tracker.lock().await;
    Json(tracker.view(today()))
}

pub async fn command(
    State(state): State<AppState>,
    Json(command): Json<Command>,
) -> Result<Json<View>, AppError> {
    let today = today();
    let mut tracker = state.tracker.lock().await;
    let was_running = tracker.timer().is_running();

    let result = tracker.dispatch(command, today).await;

    let running = tracker.timer().is_running();
    state
        .ticker
        .lock()
        .await
        .follow(was_running, running, &state.tracker);

    result?;
    Ok(Json(tracker.view(today)))
}

pub async fn get_routine(
    State(state): State<AppState>,
    Path(day): Path<u8>,
) -> Result<Json<Vec<ExerciseRow>>, AppError> {
    if !routine::is_valid_day(day) {
        return Err(AppError::not_found(format!("no routine for day {day}")));
    }
    let tracker = state.tracker.lock().await;
    Ok(Json(exercises::render(day, tracker.weights())))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
