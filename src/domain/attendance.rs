//! Attendance records and the rules derived from them.
//!
//! An account has at most one record per server-local calendar day. A record is
//! written once and never changes afterwards.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::UserRole;
use crate::config::{LATE_ARRIVAL_CUTOFF, STATUS_PRESENT};

/// Wall-clock format shared by stored times and the late cutoff.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A submitted daily attendance record.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 10)]
    pub id: i32,
    #[schema(example = 2)]
    pub account_id: i32,
    /// Employee name at submission time
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[schema(value_type = String, format = Date, example = "2026-10-05")]
    pub date: NaiveDate,
    #[schema(value_type = String, example = "08:12:45")]
    pub time_of_day: NaiveTime,
    /// Free text; "Present" takes part in the late rule and the dashboard
    #[schema(example = "Present")]
    pub status: String,
    #[schema(example = "")]
    pub remark: String,
    pub created_at: DateTime<Utc>,
}

/// Record about to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendance {
    pub account_id: i32,
    pub full_name: String,
    pub date: NaiveDate,
    pub time_of_day: NaiveTime,
    pub status: String,
    pub remark: String,
    pub created_at: DateTime<Utc>,
}

/// Render a time of day as zero-padded `HH:MM:SS`.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// A check-in is late when it is "Present" and strictly after the cutoff.
///
/// Both sides are zero-padded `HH:MM:SS`, so string order is time order.
pub fn is_late_arrival(status: &str, time_of_day: NaiveTime) -> bool {
    status == STATUS_PRESENT && format_time(time_of_day).as_str() > LATE_ARRIVAL_CUTOFF
}

/// Which records a recap request may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecapScope {
    /// Every account, records dated within `[start, end)`
    AllAccounts { start: NaiveDate, end: NaiveDate },
    /// One account's full history
    Account(i32),
}

impl RecapScope {
    /// Admins see the current month for everyone; users see their own history.
    pub fn for_requester(account_id: i32, role: UserRole, today: NaiveDate) -> Self {
        if role.is_admin() {
            let (start, end) = month_bounds(today);
            RecapScope::AllAccounts { start, end }
        } else {
            RecapScope::Account(account_id)
        }
    }
}

/// First day of `day`'s month and first day of the following month.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day - Duration::days(i64::from(day.day0()));
    let end = start
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_late_one_second_after_cutoff() {
        assert!(is_late_arrival("Present", t(8, 0, 1)));
    }

    #[test]
    fn test_not_late_at_or_before_cutoff() {
        assert!(!is_late_arrival("Present", t(8, 0, 0)));
        assert!(!is_late_arrival("Present", t(7, 59, 59)));
        assert!(!is_late_arrival("Present", t(0, 0, 0)));
    }

    #[test]
    fn test_other_statuses_never_late() {
        assert!(!is_late_arrival("Sick", t(9, 0, 0)));
        assert!(!is_late_arrival("Leave", t(23, 59, 59)));
        assert!(!is_late_arrival("present", t(9, 0, 0)));
    }

    #[test]
    fn test_format_time_is_zero_padded() {
        assert_eq!(format_time(t(7, 5, 9)), "07:05:09");
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(d(2026, 10, 18)), (d(2026, 10, 1), d(2026, 11, 1)));
        assert_eq!(month_bounds(d(2026, 12, 31)), (d(2026, 12, 1), d(2027, 1, 1)));
        assert_eq!(month_bounds(d(2024, 2, 1)), (d(2024, 2, 1), d(2024, 3, 1)));
    }

    #[test]
    fn test_recap_scope_by_role() {
        let today = d(2026, 10, 18);

        assert_eq!(
            RecapScope::for_requester(7, UserRole::Admin, today),
            RecapScope::AllAccounts {
                start: d(2026, 10, 1),
                end: d(2026, 11, 1)
            }
        );
        assert_eq!(
            RecapScope::for_requester(7, UserRole::User, today),
            RecapScope::Account(7)
        );
    }
}
