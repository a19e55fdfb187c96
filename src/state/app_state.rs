//! Shared application state handed to request handlers

use std::time::Instant;

use super::TimerStore;

/// State constructed once at startup and shared across handlers.
///
/// Handlers receive it through axum's `State` extractor rather than any
/// module-level global, which also lets tests build an isolated instance
/// per case.
#[derive(Debug)]
pub struct AppState {
    /// The authoritative timer collection.
    pub store: TimerStore,
    /// Server start instant, for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: TimerStore::new(),
            start_time: Instant::now(),
        }
    }

    /// Server uptime as a compact human-readable string.
    pub fn uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
