pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod tracker;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_state, resolve_data_dir, snapshot_path};
