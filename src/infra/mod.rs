//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations, repositories and the Unit of Work that
//! coordinates them.

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    AccountRepository, AccountStore, AttendanceRepository, AttendanceStore, EmployeeRepository,
    EmployeeStore, NotificationRepository, NotificationStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxAccountRepository, TxEmployeeRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockAccountRepository, MockAttendanceRepository, MockEmployeeRepository,
    MockNotificationRepository,
};
