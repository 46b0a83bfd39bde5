//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    attendance_handler, auth_handler, dashboard_handler, employee_handler, notification_handler,
};
use crate::domain::{
    AttendanceRecord, DashboardStats, Employee, Notification, NotificationFeed, UserRole,
};
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the attendance API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance API",
        version = "0.1.0",
        description = "Employee attendance, late-arrival notifications and presence dashboard"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        auth_handler::login,
        employee_handler::register_employee,
        employee_handler::list_employees,
        attendance_handler::submit_attendance,
        attendance_handler::recap,
        notification_handler::list_notifications,
        notification_handler::mark_notifications_read,
        dashboard_handler::dashboard_stats,
    ),
    components(
        schemas(
            UserRole,
            Employee,
            AttendanceRecord,
            Notification,
            NotificationFeed,
            DashboardStats,
            TokenResponse,
            MessageResponse,
            auth_handler::LoginRequest,
            employee_handler::RegisterEmployeeRequest,
            attendance_handler::SubmitAttendanceRequest,
            attendance_handler::SubmitAttendanceResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Session tokens"),
        (name = "Employees", description = "Employee directory"),
        (name = "Attendance", description = "Daily attendance and recap"),
        (name = "Notifications", description = "Late-arrival notifications"),
        (name = "Dashboard", description = "Presence statistics")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token obtained from /api/login"))
                        .build(),
                ),
            );
        }
    }
}
