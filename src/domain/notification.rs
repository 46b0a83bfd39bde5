//! Account notifications.

use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::attendance::format_time;
use crate::config::{LATE_ARRIVAL_CUTOFF, LATE_ARRIVAL_TITLE};

/// Notification owned by a single account.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Notification {
    pub id: i32,
    pub account_id: i32,
    #[schema(example = "Late arrival")]
    pub title: String,
    #[schema(example = "Check-in recorded at 08:12:45 (cutoff 08:00:00).")]
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification about to be persisted; always starts unread.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub account_id: i32,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl NewNotification {
    /// Late check-in notice citing the recorded time and the cutoff.
    pub fn late_arrival(account_id: i32, time_of_day: NaiveTime, created_at: DateTime<Utc>) -> Self {
        Self {
            account_id,
            title: LATE_ARRIVAL_TITLE.to_string(),
            message: format!(
                "Check-in recorded at {} (cutoff {}).",
                format_time(time_of_day),
                LATE_ARRIVAL_CUTOFF
            ),
            created_at,
        }
    }
}

/// Recent notifications plus the account's total unread count.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NotificationFeed {
    pub data: Vec<Notification>,
    /// Unread notifications overall, not only those in `data`
    #[schema(example = 3)]
    pub total_unread: u64,
}
