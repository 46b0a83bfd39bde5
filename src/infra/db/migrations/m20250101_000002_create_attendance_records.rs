//! Migration: daily attendance records, one per account per day.

use sea_orm_migration::prelude::*;

use super::Accounts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AttendanceRecords::AccountId).integer().not_null())
                    .col(ColumnDef::new(AttendanceRecords::FullName).string().not_null())
                    .col(ColumnDef::new(AttendanceRecords::Date).date().not_null())
                    .col(ColumnDef::new(AttendanceRecords::TimeOfDay).time().not_null())
                    .col(ColumnDef::new(AttendanceRecords::Status).string().not_null())
                    .col(ColumnDef::new(AttendanceRecords::Remark).text().not_null())
                    .col(
                        ColumnDef::new(AttendanceRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_records_account_id")
                            .from(AttendanceRecords::Table, AttendanceRecords::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The one-submission-per-day rule lives here, not in application code
        manager
            .create_index(
                Index::create()
                    .name("uq_attendance_records_account_date")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::AccountId)
                    .col(AttendanceRecords::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Dashboard and admin recap filter by date
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_records_date")
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AttendanceRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AttendanceRecords {
    Table,
    Id,
    AccountId,
    FullName,
    Date,
    TimeOfDay,
    Status,
    Remark,
    CreatedAt,
}
