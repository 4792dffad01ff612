use crate::models::{AddHabitRequest, HabitState, StateResponse};
use crate::state::AppState;
use crate::storage::save;
use crate::tracker;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use tokio::sync::MutexGuard;
use tracing::debug;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = current(&state).await;
    Html(render_index(&data, tracker::progress(&data)))
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let data = current(&state).await;
    Json(to_response(&data))
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<AddHabitRequest>,
) -> Json<StateResponse> {
    let data = apply(&state, |data| tracker::add(data, &payload.text)).await;
    Json(to_response(&data))
}

pub async fn toggle_habit(State(state): State<AppState>, Path(id): Path<u64>) -> Json<StateResponse> {
    let data = apply(&state, |data| tracker::toggle(data, id)).await;
    Json(to_response(&data))
}

pub async fn add_habit_form(
    State(state): State<AppState>,
    Form(payload): Form<AddHabitRequest>,
) -> Redirect {
    apply(&state, |data| tracker::add(data, &payload.text)).await;
    Redirect::to("/")
}

pub async fn toggle_habit_form(State(state): State<AppState>, Path(id): Path<u64>) -> Redirect {
    apply(&state, |data| tracker::toggle(data, id)).await;
    Redirect::to("/")
}

/// Locks the live state and rolls it over if the calendar day changed since it was last touched.
async fn current(state: &AppState) -> MutexGuard<'_, HabitState> {
    let mut data = state.data.lock().await;
    let loaded = tracker::roll_over(data.clone(), &tracker::today_key());
    if loaded.rolled_over {
        *data = loaded.state;
        save(&state.data_path, &data).await;
    }
    data
}

/// Runs one action against today's state and saves if it changed anything.
async fn apply<F>(state: &AppState, action: F) -> HabitState
where
    F: FnOnce(HabitState) -> HabitState,
{
    let mut data = current(state).await;
    let next = action(data.clone());
    if next == *data {
        debug!("action left state unchanged");
    } else {
        *data = next;
        save(&state.data_path, &data).await;
    }
    data.clone()
}

fn to_response(data: &HabitState) -> StateResponse {
    StateResponse {
        day: data.day.clone(),
        habits: data.habits.clone(),
        progress: tracker::progress(data),
    }
}
