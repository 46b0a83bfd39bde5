//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::{Clock, SystemClock};
use crate::infra::Database;
use crate::services::{
    AttendanceService, AuthService, DashboardService, EmployeeService, NotificationService,
    ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub employee_service: Arc<dyn EmployeeService>,
    pub attendance_service: Arc<dyn AttendanceService>,
    pub notification_service: Arc<dyn NotificationService>,
    pub dashboard_service: Arc<dyn DashboardService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire services over the database using the system clock.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        Self::with_clock(database, config, Arc::new(SystemClock))
    }

    /// Wire services over the database with an explicit clock.
    pub fn with_clock(database: Arc<Database>, config: Config, clock: Arc<dyn Clock>) -> Self {
        let container = Services::from_connection(database.get_connection(), config, clock);
        Self::from_container(&container, database)
    }

    /// Take every service handle from a container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: container.auth(),
            employee_service: container.employees(),
            attendance_service: container.attendance(),
            notification_service: container.notifications(),
            dashboard_service: container.dashboard(),
            database,
        }
    }
}
