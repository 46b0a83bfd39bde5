//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and persistence to fulfill use cases.
//! They depend on the [`UnitOfWork`](crate::infra::UnitOfWork) abstraction and
//! receive the clock and configuration at construction.

mod attendance_service;
mod auth_service;
pub mod container;
mod dashboard_service;
mod employee_service;
mod notification_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use attendance_service::{AttendanceManager, AttendanceService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use dashboard_service::{DashboardAggregator, DashboardService};
pub use employee_service::{EmployeeDirectory, EmployeeService};
pub use notification_service::{NotificationManager, NotificationService};

pub(crate) use employee_service::create_account_with_profile;

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;

#[cfg(test)]
pub(crate) mod test_support {
    //! Unit of Work over mocked repositories.

    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::errors::{AppError, AppResult};
    use crate::infra::{
        AccountRepository, AttendanceRepository, EmployeeRepository, MockAccountRepository,
        MockAttendanceRepository, MockEmployeeRepository, MockNotificationRepository,
        NotificationRepository, TransactionContext, UnitOfWork,
    };

    /// Repositories without expectations panic when called.
    #[derive(Default)]
    pub struct TestUnitOfWork {
        accounts: Arc<MockAccountRepository>,
        employees: Arc<MockEmployeeRepository>,
        attendance: Arc<MockAttendanceRepository>,
        notifications: Arc<MockNotificationRepository>,
    }

    impl TestUnitOfWork {
        pub fn with_accounts(mut self, repo: MockAccountRepository) -> Self {
            self.accounts = Arc::new(repo);
            self
        }

        pub fn with_employees(mut self, repo: MockEmployeeRepository) -> Self {
            self.employees = Arc::new(repo);
            self
        }

        pub fn with_attendance(mut self, repo: MockAttendanceRepository) -> Self {
            self.attendance = Arc::new(repo);
            self
        }

        pub fn with_notifications(mut self, repo: MockNotificationRepository) -> Self {
            self.notifications = Arc::new(repo);
            self
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn accounts(&self) -> Arc<dyn AccountRepository> {
            self.accounts.clone()
        }

        fn employees(&self) -> Arc<dyn EmployeeRepository> {
            self.employees.clone()
        }

        fn attendance(&self) -> Arc<dyn AttendanceRepository> {
            self.attendance.clone()
        }

        fn notifications(&self) -> Arc<dyn NotificationRepository> {
            self.notifications.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                    Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
                > + Send,
            T: Send,
        {
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }
}
