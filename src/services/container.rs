//! Service Container - Centralized service access.
//!
//! Handlers depend on service traits only; the container decides which
//! implementations back them.

use std::sync::Arc;

use super::{
    AttendanceManager, AttendanceService, AuthService, Authenticator, DashboardAggregator,
    DashboardService, EmployeeDirectory, EmployeeService, NotificationManager,
    NotificationService,
};
use crate::config::Config;
use crate::domain::Clock;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn employees(&self) -> Arc<dyn EmployeeService>;

    fn attendance(&self) -> Arc<dyn AttendanceService>;

    fn notifications(&self) -> Arc<dyn NotificationService>;

    fn dashboard(&self) -> Arc<dyn DashboardService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    employee_service: Arc<dyn EmployeeService>,
    attendance_service: Arc<dyn AttendanceService>,
    notification_service: Arc<dyn NotificationService>,
    dashboard_service: Arc<dyn DashboardService>,
}

impl Services {
    /// Wire every service over one database connection, signing config and clock.
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        config: Config,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            employee_service: Arc::new(EmployeeDirectory::new(uow.clone())),
            attendance_service: Arc::new(AttendanceManager::new(uow.clone(), clock.clone())),
            notification_service: Arc::new(NotificationManager::new(uow.clone())),
            dashboard_service: Arc::new(DashboardAggregator::new(uow, clock)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }

    fn attendance(&self) -> Arc<dyn AttendanceService> {
        self.attendance_service.clone()
    }

    fn notifications(&self) -> Arc<dyn NotificationService> {
        self.notification_service.clone()
    }

    fn dashboard(&self) -> Arc<dyn DashboardService> {
        self.dashboard_service.clone()
    }
}
