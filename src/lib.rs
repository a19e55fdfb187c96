//! Tickdown - an in-memory countdown timer HTTP service
//!
//! Clients create named timers with a duration; the server stores each
//! timer's end instant and projects remaining time from the wall clock at
//! query time. Nothing counts down in the background: expiry is purely a
//! read-time comparison.

pub mod api;
pub mod config;
pub mod error;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::ApiError;
pub use state::{AppState, TimerStore};
pub use utils::signals::shutdown_signal;
