pub mod app;
pub mod config;
pub mod consistency;
pub mod errors;
pub mod exercises;
pub mod handlers;
pub mod routine;
pub mod state;
pub mod storage;
pub mod ticker;
pub mod timer;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::Store;
pub use tracker::Tracker;
