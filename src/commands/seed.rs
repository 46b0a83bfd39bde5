//! Seed command - Creates the initial admin account.
//!
//! Self-registration always yields role `user`, so this is how the first
//! administrator comes to exist. Does nothing once any account exists.

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::domain::{Employee, EmployeeDetails, SecretHash, UserRole};
use crate::errors::AppResult;
use crate::infra::{Database, Persistence, UnitOfWork};
use crate::services::create_account_with_profile;
use crate::with_transaction;

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let uow = Persistence::new(db.get_connection());

    match seed_admin(&uow, args).await? {
        Some(admin) => tracing::info!(
            account_id = admin.account_id,
            "Admin account created for {}",
            admin.full_name
        ),
        None => tracing::info!("Accounts already exist, nothing to seed"),
    }

    Ok(())
}

/// Create the admin account and profile unless any account exists.
pub async fn seed_admin<U: UnitOfWork>(uow: &U, args: SeedArgs) -> AppResult<Option<Employee>> {
    let secret_hash = SecretHash::hash(&args.password)?;
    let details = EmployeeDetails {
        employee_number: args.employee_number,
        full_name: args.full_name,
        job_title: args.job_title,
        division: args.division,
    };
    let email = args.email;

    with_transaction!(uow, |ctx| {
        if ctx.accounts().count().await? > 0 {
            return Ok(None);
        }

        let admin =
            create_account_with_profile(&ctx, email, secret_hash, details, UserRole::Admin)
                .await?;
        Ok(Some(admin))
    })
}
