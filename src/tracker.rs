//! Habit state transitions.
//!
//! Every operation takes the state by value and hands back the next one, so the
//! caller decides when to persist. Clock-dependent operations have an `_at`
//! variant that takes the time explicitly.

use crate::models::{Habit, HabitState};
use chrono::{Local, NaiveDate, Utc};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub state: HabitState,
    /// The snapshot belonged to an earlier day and its done flags were cleared.
    pub rolled_over: bool,
}

pub fn today_key() -> String {
    day_key(Local::now().date_naive())
}

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn load_at(snapshot: Option<HabitState>, today: &str) -> Loaded {
    match snapshot {
        None => Loaded {
            state: HabitState::empty(today),
            rolled_over: false,
        },
        Some(state) => roll_over(state, today),
    }
}

pub fn roll_over(mut state: HabitState, today: &str) -> Loaded {
    if state.day == today {
        return Loaded {
            state,
            rolled_over: false,
        };
    }

    info!(from = %state.day, to = today, habits = state.habits.len(), "new day, clearing done flags");
    for habit in &mut state.habits {
        habit.done = false;
    }
    state.day = today.to_string();

    Loaded {
        state,
        rolled_over: true,
    }
}

pub fn add(state: HabitState, raw_text: &str) -> HabitState {
    add_at(state, raw_text, now_millis())
}

pub fn add_at(mut state: HabitState, raw_text: &str, now_millis: u64) -> HabitState {
    let text = raw_text.trim();
    if text.is_empty() {
        return state;
    }

    let id = next_id(&state.habits, now_millis);
    state.habits.push(Habit {
        id,
        text: text.to_string(),
        done: false,
    });
    state
}

/// Creation timestamp, or the successor of the largest id when the clock has
/// not moved past it.
fn next_id(habits: &[Habit], now_millis: u64) -> u64 {
    match habits.iter().map(|habit| habit.id).max() {
        Some(max) if max >= now_millis => max.saturating_add(1),
        _ => now_millis,
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

pub fn toggle(mut state: HabitState, id: u64) -> HabitState {
    if let Some(habit) = state.habits.iter_mut().find(|habit| habit.id == id) {
        habit.done = !habit.done;
    }
    state
}

/// Percentage of done habits, rounded half up. Zero for an empty list.
pub fn progress(state: &HabitState) -> u8 {
    let total = state.habits.len();
    if total == 0 {
        return 0;
    }

    let done = state.habits.iter().filter(|habit| habit.done).count();
    let percent = (done * 200 + total) / (total * 2);
    percent as u8
}
