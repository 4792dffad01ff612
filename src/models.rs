use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

/// Persisted snapshot: the day it was last saved and the habits in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitState {
    pub day: String,
    pub habits: Vec<Habit>,
}

impl HabitState {
    pub fn empty(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            habits: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddHabitRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StateResponse {
    pub day: String,
    pub habits: Vec<Habit>,
    pub progress: u8,
}
