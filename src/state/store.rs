//! The authoritative in-memory timer collection

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use tracing::info;

use super::timer::{duration_to_ms, StatusFilter, Timer, TimerDetail, TimerId, TimerListing};

/// Failures a store operation can produce.
#[derive(Debug)]
pub enum StoreError {
    /// No timer with the given id exists in the collection.
    NotFound(TimerId),
    /// The store mutex was poisoned by a panicking holder.
    Lock(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Timer with id {id} not found"),
            StoreError::Lock(detail) => write!(f, "Failed to lock timer store: {detail}"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug)]
struct StoreInner {
    timers: Vec<Timer>,
    next_id: TimerId,
}

/// Owns the timer collection and the next-id counter.
///
/// Every operation takes the mutex once, captures `now` once, and runs to
/// completion, so a filtered listing sees a single consistent instant across
/// all records. Ids are handed out sequentially and are not reused after a
/// single delete; only [`TimerStore::clear`] resets the sequence.
#[derive(Debug)]
pub struct TimerStore {
    inner: Mutex<StoreInner>,
}

impl TimerStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                timers: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, StoreError> {
        self.inner.lock().map_err(|e| StoreError::Lock(e.to_string()))
    }

    /// List timers in insertion order, each annotated with its active flag
    /// at the moment of the listing.
    pub fn list(&self, filter: StatusFilter) -> Result<Vec<TimerListing>, StoreError> {
        let inner = self.lock()?;
        let now_ms = Utc::now().timestamp_millis();

        Ok(inner
            .timers
            .iter()
            .filter(|timer| filter.matches(timer, now_ms))
            .map(|timer| TimerListing {
                is_active: timer.is_active_at(now_ms),
                timer: timer.clone(),
            })
            .collect())
    }

    /// Look up a single timer, projecting its remaining time.
    pub fn get(&self, id: TimerId) -> Result<TimerDetail, StoreError> {
        let inner = self.lock()?;
        let timer = inner
            .timers
            .iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let now_ms = Utc::now().timestamp_millis();
        let remaining_time = timer.remaining_at(now_ms);

        Ok(TimerDetail {
            remaining_time,
            is_active: remaining_time > 0,
            timer: timer.clone(),
        })
    }

    /// Create a timer counting down from this instant.
    ///
    /// The payload is assumed to have passed validation; the name is stored
    /// trimmed. The u64 id space outlives any process, so exhaustion is not
    /// guarded.
    pub fn create(&self, name: &str, duration: f64) -> Result<Timer, StoreError> {
        let mut inner = self.lock()?;
        let now = Utc::now();
        let start_time = now.timestamp_millis();

        let timer = Timer {
            id: inner.next_id,
            name: name.trim().to_string(),
            duration,
            start_time,
            end_time: start_time + duration_to_ms(duration),
            created_at: now,
            updated_at: None,
        };
        inner.next_id += 1;
        inner.timers.push(timer.clone());

        info!("Created timer {} ({:?}, {}s)", timer.id, timer.name, timer.duration);
        Ok(timer)
    }

    /// Rewrite a timer's name and duration, restarting its countdown from
    /// this instant.
    pub fn update(&self, id: TimerId, name: &str, duration: f64) -> Result<Timer, StoreError> {
        let mut inner = self.lock()?;
        let timer = inner
            .timers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let now = Utc::now();
        timer.name = name.trim().to_string();
        timer.duration = duration;
        timer.start_time = now.timestamp_millis();
        timer.end_time = timer.start_time + duration_to_ms(duration);
        timer.updated_at = Some(now);
        let updated = timer.clone();

        info!("Updated timer {}, countdown restarted", id);
        Ok(updated)
    }

    /// Remove a single timer and return it. Leaves the id counter alone, so
    /// ids stay unique until a full clear.
    pub fn remove(&self, id: TimerId) -> Result<Timer, StoreError> {
        let mut inner = self.lock()?;
        let index = inner
            .timers
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let removed = inner.timers.remove(index);
        info!("Deleted timer {}", id);
        Ok(removed)
    }

    /// Remove every timer and reset the id sequence to 1. Returns how many
    /// were removed.
    pub fn clear(&self) -> Result<usize, StoreError> {
        let mut inner = self.lock()?;
        let count = inner.timers.len();
        inner.timers.clear();
        inner.next_id = 1;

        info!("Deleted all {} timers, id sequence reset", count);
        Ok(count)
    }
}

impl Default for TimerStore {
    fn default() -> Self {
        Self::new()
    }
}
