use crate::errors::StoreError;
use crate::models::HabitState;
use crate::tracker::{self, Loaded};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

/// Key under which the whole state is stored.
pub const STORE_KEY: &str = "calmloop";

pub fn resolve_data_dir() -> PathBuf {
    env::var("APP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

pub fn snapshot_path(data_dir: &Path) -> PathBuf {
    data_dir.join(format!("{STORE_KEY}.json"))
}

pub async fn try_read_snapshot(path: &Path) -> Result<Option<HabitState>, StoreError> {
    match fs::read(path).await {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Reads the stored snapshot, treating any failure as "no data".
pub async fn read_snapshot(path: &Path) -> Option<HabitState> {
    match try_read_snapshot(path).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            error!("ignoring stored state at {}: {err}", path.display());
            None
        }
    }
}

pub async fn write_snapshot(path: &Path, state: &HabitState) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(state)?;
    fs::write(path, payload).await?;
    Ok(())
}

/// Writes the snapshot, logging failures instead of returning them.
pub async fn save(path: &Path, state: &HabitState) {
    if let Err(err) = write_snapshot(path, state).await {
        error!("failed to save state to {}: {err}", path.display());
    }
}

/// Hydrates today's state, saving right away if the stored day was stale.
pub async fn load_state(path: &Path) -> HabitState {
    load_state_for(path, &tracker::today_key()).await
}

pub async fn load_state_for(path: &Path, today: &str) -> HabitState {
    let Loaded { state, rolled_over } = tracker::load_at(read_snapshot(path).await, today);
    info!(day = %state.day, habits = state.habits.len(), "state loaded");
    if rolled_over {
        save(path, &state).await;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Habit;

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("calmloop_storage_{name}_{}_{nanos}.json", std::process::id()));
        path
    }

    fn sample(day: &str, done: bool) -> HabitState {
        HabitState {
            day: day.to_string(),
            habits: vec![
                Habit {
                    id: 1,
                    text: "Meditate".to_string(),
                    done,
                },
                Habit {
                    id: 2,
                    text: "Read".to_string(),
                    done: false,
                },
            ],
        }
    }

    #[test]
    fn snapshot_path_uses_store_key() {
        let path = snapshot_path(Path::new("data"));
        assert_eq!(path, PathBuf::from("data/calmloop.json"));
    }

    #[tokio::test]
    async fn missing_file_loads_empty_state() {
        let path = temp_path("missing");
        assert!(try_read_snapshot(&path).await.unwrap().is_none());

        let state = load_state_for(&path, "2026-01-05").await;
        assert_eq!(state, HabitState::empty("2026-01-05"));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn malformed_file_loads_empty_state() {
        let path = temp_path("malformed");
        fs::write(&path, b"{ not json").await.unwrap();
        assert!(matches!(
            try_read_snapshot(&path).await,
            Err(StoreError::Json(_))
        ));

        let state = load_state_for(&path, "2026-01-05").await;
        assert_eq!(state, HabitState::empty("2026-01-05"));
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn schema_mismatch_loads_empty_state() {
        let path = temp_path("schema");
        fs::write(&path, br#"{"date":"Mon Jan 05 2026","items":[]}"#)
            .await
            .unwrap();

        let state = load_state_for(&path, "2026-01-05").await;
        assert_eq!(state, HabitState::empty("2026-01-05"));
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn saved_state_loads_back_on_the_same_day() {
        let path = temp_path("roundtrip");
        let state = sample("2026-01-05", true);
        write_snapshot(&path, &state).await.unwrap();

        assert_eq!(load_state_for(&path, "2026-01-05").await, state);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn stale_snapshot_is_reset_and_saved() {
        let path = temp_path("rollover");
        write_snapshot(&path, &sample("2026-01-04", true)).await.unwrap();

        let state = load_state_for(&path, "2026-01-05").await;
        assert_eq!(state, sample("2026-01-05", false));

        let stored = try_read_snapshot(&path).await.unwrap();
        assert_eq!(stored, Some(sample("2026-01-05", false)));
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn save_overwrites_previous_value() {
        let path = temp_path("overwrite");
        write_snapshot(&path, &sample("2026-01-05", true)).await.unwrap();
        let replacement = HabitState::empty("2026-01-05");
        save(&path, &replacement).await;

        assert_eq!(try_read_snapshot(&path).await.unwrap(), Some(replacement));
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn save_to_unwritable_path_does_not_panic() {
        let path = temp_path("nodir").join("nested").join("calmloop.json");
        save(&path, &HabitState::empty("2026-01-05")).await;
        assert!(!path.exists());
    }
}
