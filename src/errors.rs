use thiserror::Error;

/// Failures at the persistent store boundary. Absence of a snapshot is not an error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot json error: {0}")]
    Json(#[from] serde_json::Error),
}
