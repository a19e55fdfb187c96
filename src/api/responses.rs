//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Timer, TimerDetail, TimerListing};

/// Response for the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<TimerListing>,
}

impl TimerListResponse {
    pub fn new(data: Vec<TimerListing>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Response carrying a single timer record, for create/update/delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub success: bool,
    pub message: String,
    pub data: Timer,
}

impl TimerResponse {
    pub fn created(timer: Timer) -> Self {
        Self {
            success: true,
            message: "Timer created successfully".to_string(),
            data: timer,
        }
    }

    pub fn updated(timer: Timer) -> Self {
        Self {
            success: true,
            message: "Timer updated successfully".to_string(),
            data: timer,
        }
    }

    pub fn deleted(timer: Timer) -> Self {
        Self {
            success: true,
            message: "Timer deleted successfully".to_string(),
            data: timer,
        }
    }
}

/// Response for a point lookup, with remaining time projected in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerDetailResponse {
    pub success: bool,
    pub data: TimerDetail,
}

impl TimerDetailResponse {
    pub fn new(data: TimerDetail) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response for the delete-all endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAllResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteAllResponse {
    pub fn new(count: usize) -> Self {
        Self {
            success: true,
            message: format!("All {count} timers deleted successfully"),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
}

impl HealthResponse {
    pub fn ok(uptime: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
        }
    }
}
