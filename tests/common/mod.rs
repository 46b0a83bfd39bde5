//! Shared fixtures: in-memory database, manual clock and wired services.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use sea_orm::ConnectOptions;

use attendance_api::cli::args::SeedArgs;
use attendance_api::commands::seed::seed_admin;
use attendance_api::config::Config;
use attendance_api::domain::{Employee, EmployeeDetails, ManualClock, NewEmployee};
use attendance_api::infra::{Database, Persistence};
use attendance_api::services::{EmployeeService, ServiceContainer, Services};

pub const JWT_SECRET: &str = "integration-test-secret-at-least-32-chars";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin-pass";

pub struct TestContext {
    pub database: Arc<Database>,
    pub clock: Arc<ManualClock>,
    pub config: Config,
    pub services: Services,
    pub uow: Persistence,
}

/// Server-local timestamp.
pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("unambiguous local time")
}

/// Fresh migrated in-memory database with the clock at 2026-10-05 07:00:00.
pub async fn setup() -> TestContext {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let database = Arc::new(Database::open(options).await.expect("database opens"));
    let clock = Arc::new(ManualClock::new(at(2026, 10, 5, 7, 0, 0)));
    let config = Config::new("sqlite::memory:", JWT_SECRET);
    let services = Services::from_connection(
        database.get_connection(),
        config.clone(),
        clock.clone(),
    );
    let uow = Persistence::new(database.get_connection());

    TestContext {
        database,
        clock,
        config,
        services,
        uow,
    }
}

pub fn new_employee(email: &str, full_name: &str) -> NewEmployee {
    NewEmployee {
        email: email.to_string(),
        secret: "pass123".to_string(),
        details: EmployeeDetails {
            employee_number: format!("STF-{}", full_name.len()),
            full_name: full_name.to_string(),
            job_title: "Staff".to_string(),
            division: "General Affair".to_string(),
        },
    }
}

impl TestContext {
    pub async fn register(&self, email: &str, full_name: &str) -> Employee {
        self.services
            .employees()
            .register(new_employee(email, full_name))
            .await
            .expect("registration succeeds")
    }

    pub async fn seed_admin(&self) -> Employee {
        seed_admin(
            &self.uow,
            SeedArgs {
                email: ADMIN_EMAIL.to_string(),
                password: ADMIN_PASSWORD.to_string(),
                employee_number: "ADM001".to_string(),
                full_name: "Administrator".to_string(),
                job_title: "Administrator".to_string(),
                division: "Management".to_string(),
            },
        )
        .await
        .expect("seed succeeds")
        .expect("database was empty")
    }

    pub fn set_clock(&self, at: DateTime<Local>) {
        self.clock.set(at);
    }
}
