//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20250101_000001_create_accounts_and_employees;
mod m20250101_000002_create_attendance_records;
mod m20250101_000003_create_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_accounts_and_employees::Migration),
            Box::new(m20250101_000002_create_attendance_records::Migration),
            Box::new(m20250101_000003_create_notifications::Migration),
        ]
    }
}

/// Identifiers of the `accounts` table, shared by the migrations that reference it.
#[derive(DeriveIden)]
pub(crate) enum Accounts {
    Table,
    Id,
    Email,
    SecretHash,
    Role,
    CreatedAt,
}
