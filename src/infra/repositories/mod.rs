//! Repository layer - Data access abstraction
//!
//! One repository per aggregate. Each exposes a trait (mockable in tests) and a
//! `*Store` implementation over the shared connection pool. Writes that must
//! join a transaction are reached through [`crate::infra::TransactionContext`].

mod account_repository;
mod attendance_repository;
mod employee_repository;
pub(crate) mod entities;
mod notification_repository;

use sea_orm::{DbErr, SqlErr};

pub use account_repository::{AccountRepository, AccountStore};
pub use attendance_repository::{AttendanceRepository, AttendanceStore};
pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use notification_repository::{NotificationRepository, NotificationStore};

pub(crate) use account_repository::{count_accounts, find_account_by_email, insert_account};
pub(crate) use employee_repository::insert_employee;

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use attendance_repository::MockAttendanceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use notification_repository::MockNotificationRepository;

/// True when the store rejected a write because of a unique index.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
