//! Employee registration and listing.

mod common;

use sea_orm::ConnectionTrait;

use attendance_api::domain::UserRole;
use attendance_api::errors::AppError;
use attendance_api::infra::UnitOfWork;
use attendance_api::services::{AuthService, EmployeeService, ServiceContainer};

use common::{new_employee, setup};

#[tokio::test]
async fn test_register_creates_account_and_profile() {
    let ctx = setup().await;

    let profile = ctx.register("jane@example.com", "Jane Doe").await;

    assert_eq!(profile.full_name, "Jane Doe");
    assert_eq!(profile.job_title, "Staff");
    assert_eq!(profile.division, "General Affair");

    let account = ctx
        .uow
        .accounts()
        .find_by_email("jane@example.com")
        .await
        .unwrap()
        .expect("account exists");
    assert_eq!(account.id, profile.account_id);
    assert_eq!(account.role, UserRole::User);
    assert_ne!(account.secret_hash, "pass123");
}

#[tokio::test]
async fn test_registered_employee_can_log_in() {
    let ctx = setup().await;
    ctx.register("jane@example.com", "Jane Doe").await;

    let token = ctx
        .services
        .auth()
        .issue_token("jane@example.com", "pass123")
        .await
        .unwrap();

    assert_eq!(token.role, UserRole::User);
    assert_eq!(token.full_name.as_deref(), Some("Jane Doe"));
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let ctx = setup().await;
    ctx.register("jane@example.com", "Jane Doe").await;

    let result = ctx
        .services
        .employees()
        .register(new_employee("jane@example.com", "Another Jane"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(ctx.uow.accounts().count().await.unwrap(), 1);
    assert_eq!(ctx.uow.employees().count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_short_secret_is_rejected_before_writing() {
    let ctx = setup().await;
    let mut employee = new_employee("jane@example.com", "Jane Doe");
    employee.secret = "12".to_string();

    let result = ctx.services.employees().register(employee).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(ctx.uow.accounts().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_failed_profile_write_rolls_back_account() {
    let ctx = setup().await;

    // Make the second write of the registration fail
    ctx.database
        .connection()
        .execute_unprepared("DROP TABLE employees")
        .await
        .unwrap();

    let result = ctx
        .services
        .employees()
        .register(new_employee("jane@example.com", "Jane Doe"))
        .await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert_eq!(ctx.uow.accounts().count().await.unwrap(), 0);
    assert!(ctx
        .uow
        .accounts()
        .find_by_email("jane@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_list_all_in_registration_order() {
    let ctx = setup().await;
    assert!(ctx.services.employees().list_all().await.unwrap().is_empty());

    for (email, name) in [
        ("c@example.com", "Charlie"),
        ("a@example.com", "Alice"),
        ("b@example.com", "Bob"),
    ] {
        ctx.register(email, name).await;
    }

    let names: Vec<_> = ctx
        .services
        .employees()
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.full_name)
        .collect();

    assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
}

#[tokio::test]
async fn test_seed_only_runs_on_empty_database() {
    let ctx = setup().await;

    let admin = ctx.seed_admin().await;
    let account = ctx
        .uow
        .accounts()
        .find_by_id(admin.account_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.role, UserRole::Admin);

    let again = attendance_api::commands::seed::seed_admin(
        &ctx.uow,
        attendance_api::cli::args::SeedArgs {
            email: "second-admin@example.com".to_string(),
            password: "admin-pass".to_string(),
            employee_number: "ADM002".to_string(),
            full_name: "Second Admin".to_string(),
            job_title: "Administrator".to_string(),
            division: "Management".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(again.is_none());
    assert_eq!(ctx.uow.accounts().count().await.unwrap(), 1);
}
