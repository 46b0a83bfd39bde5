//! HTTP request handlers.

pub mod attendance_handler;
pub mod auth_handler;
pub mod dashboard_handler;
pub mod employee_handler;
pub mod notification_handler;

pub use attendance_handler::attendance_routes;
pub use auth_handler::auth_routes;
pub use dashboard_handler::dashboard_routes;
pub use employee_handler::employee_routes;
pub use notification_handler::notification_routes;
