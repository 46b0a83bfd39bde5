//! Domain layer - Core business entities and rules
//!
//! Accounts, employee profiles, attendance records and notifications, plus the
//! rules that tie them together (late arrival, recap scope, presence ratio).
//! Nothing here talks to the database or HTTP.

pub mod account;
pub mod attendance;
pub mod clock;
pub mod credential;
pub mod dashboard;
pub mod employee;
pub mod notification;

pub use account::{Account, UserRole};
pub use attendance::{is_late_arrival, AttendanceRecord, NewAttendance, RecapScope};
pub use clock::{Clock, ManualClock, SystemClock};
pub use credential::SecretHash;
pub use dashboard::DashboardStats;
pub use employee::{Employee, EmployeeDetails, NewEmployee};
pub use notification::{NewNotification, Notification, NotificationFeed};
