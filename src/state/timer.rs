//! Timer record and its read-time projections

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned sequentially by the store, starting at 1.
pub type TimerId = u64;

/// A named countdown with a fixed end instant.
///
/// `start_time` and `end_time` are epoch milliseconds; `duration` is seconds.
/// `end_time` is always `start_time + duration * 1000` and is recomputed on
/// every create and update, never mutated on its own. Whether the timer is
/// still running is not stored anywhere: it is derived from `end_time` and
/// the clock at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub id: TimerId,
    pub name: String,
    /// Requested duration in seconds (fractional values allowed).
    pub duration: f64,
    pub start_time: i64,
    pub end_time: i64,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Timer {
    /// Check whether the timer is still counting down at `now_ms`.
    pub fn is_active_at(&self, now_ms: i64) -> bool {
        self.end_time > now_ms
    }

    /// Milliseconds left at `now_ms`, clamped to zero once expired.
    pub fn remaining_at(&self, now_ms: i64) -> i64 {
        (self.end_time - now_ms).max(0)
    }
}

/// Convert a duration in seconds to whole milliseconds.
pub(crate) fn duration_to_ms(duration_secs: f64) -> i64 {
    (duration_secs * 1000.0).round() as i64
}

/// A timer as returned by a listing, annotated with its active flag at the
/// instant the listing was taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerListing {
    #[serde(flatten)]
    pub timer: Timer,
    pub is_active: bool,
}

/// A single timer as returned by a point lookup, with the remaining time
/// computed at the instant of the lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerDetail {
    #[serde(flatten)]
    pub timer: Timer,
    pub remaining_time: i64,
    pub is_active: bool,
}

/// Status filter for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    ActiveOnly,
    ExpiredOnly,
}

impl StatusFilter {
    /// Map the optional `?active=` query value onto a filter.
    pub fn from_query(active: Option<bool>) -> Self {
        match active {
            None => StatusFilter::All,
            Some(true) => StatusFilter::ActiveOnly,
            Some(false) => StatusFilter::ExpiredOnly,
        }
    }

    /// Whether `timer` belongs in a listing taken at `now_ms`.
    pub fn matches(self, timer: &Timer, now_ms: i64) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::ActiveOnly => timer.is_active_at(now_ms),
            StatusFilter::ExpiredOnly => !timer.is_active_at(now_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer_ending_at(id: TimerId, end_time: i64) -> Timer {
        Timer {
            id,
            name: format!("timer-{id}"),
            duration: 1.0,
            start_time: end_time - 1000,
            end_time,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn active_is_a_strict_comparison() {
        let timer = timer_ending_at(1, 5_000);
        assert!(timer.is_active_at(4_999));
        assert!(!timer.is_active_at(5_000));
        assert!(!timer.is_active_at(5_001));
    }

    #[test]
    fn remaining_clamps_to_zero() {
        let timer = timer_ending_at(1, 5_000);
        assert_eq!(timer.remaining_at(3_000), 2_000);
        assert_eq!(timer.remaining_at(5_000), 0);
        assert_eq!(timer.remaining_at(9_000), 0);
    }

    #[test]
    fn filters_partition_a_fixed_snapshot() {
        let now_ms = 10_000;
        let timers = vec![
            timer_ending_at(1, 9_000),
            timer_ending_at(2, 10_000),
            timer_ending_at(3, 10_001),
            timer_ending_at(4, 20_000),
        ];

        let ids = |filter: StatusFilter| -> Vec<TimerId> {
            timers
                .iter()
                .filter(|t| filter.matches(t, now_ms))
                .map(|t| t.id)
                .collect()
        };

        let active = ids(StatusFilter::ActiveOnly);
        let expired = ids(StatusFilter::ExpiredOnly);
        assert_eq!(active, vec![3, 4]);
        assert_eq!(expired, vec![1, 2]);

        let mut union = active;
        union.extend(expired);
        union.sort_unstable();
        assert_eq!(union, ids(StatusFilter::All));
    }

    #[test]
    fn fractional_durations_round_to_whole_milliseconds() {
        assert_eq!(duration_to_ms(180.0), 180_000);
        assert_eq!(duration_to_ms(0.05), 50);
        assert_eq!(duration_to_ms(1.0005), 1_001);
    }

    #[test]
    fn updated_at_is_omitted_until_set() {
        let timer = timer_ending_at(1, 5_000);
        let json = serde_json::to_value(&timer).unwrap();
        assert!(json.get("updatedAt").is_none());
        assert!(json.get("startTime").is_some());
    }
}
