//! State management module
//!
//! The timer record, the store that owns the collection, and the shared
//! application state handed to handlers.

pub mod app_state;
pub mod store;
pub mod timer;

// Re-export main types
pub use app_state::AppState;
pub use store::{StoreError, TimerStore};
pub use timer::{StatusFilter, Timer, TimerDetail, TimerId, TimerListing};
