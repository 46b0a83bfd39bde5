//! Employee profile entity and registration input.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Employee profile, owned 1:1 by an account.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 2)]
    pub account_id: i32,
    /// Organization-issued staff identifier
    #[schema(example = "STF001")]
    pub employee_number: String,
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[schema(example = "Network Technician")]
    pub job_title: String,
    #[schema(example = "IT Support")]
    pub division: String,
    pub created_at: DateTime<Utc>,
}

/// Profile fields supplied at registration.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    pub employee_number: String,
    pub full_name: String,
    pub job_title: String,
    pub division: String,
}

/// Account + profile registration request.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub email: String,
    pub secret: String,
    pub details: EmployeeDetails,
}
