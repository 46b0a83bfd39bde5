//! Attendance record repository.
//!
//! Owns the one-record-per-day rule: the `(account_id, date)` unique index
//! rejects a second insert, which is reported as
//! [`AppError::AlreadySubmittedToday`]. There is no separate existence check,
//! so concurrent submissions cannot both slip through.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::attendance::{self, ActiveModel, Entity as AttendanceEntity};
use super::is_unique_violation;
use crate::domain::{AttendanceRecord, NewAttendance, RecapScope};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Insert a record; fails with `AlreadySubmittedToday` if the account
    /// already has one for that date.
    async fn create(&self, record: NewAttendance) -> AppResult<AttendanceRecord>;

    /// Records visible under `scope`, newest first
    async fn list(&self, scope: RecapScope) -> AppResult<Vec<AttendanceRecord>>;

    async fn count_by_date_and_status(&self, date: NaiveDate, status: &str) -> AppResult<u64>;
}

/// Concrete implementation of AttendanceRepository
pub struct AttendanceStore {
    db: DatabaseConnection,
}

impl AttendanceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttendanceRepository for AttendanceStore {
    async fn create(&self, record: NewAttendance) -> AppResult<AttendanceRecord> {
        let active_model = ActiveModel {
            account_id: Set(record.account_id),
            full_name: Set(record.full_name),
            date: Set(record.date),
            time_of_day: Set(record.time_of_day),
            status: Set(record.status),
            remark: Set(record.remark),
            created_at: Set(record.created_at),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::AlreadySubmittedToday
            } else {
                AppError::from(e)
            }
        })?;

        Ok(AttendanceRecord::from(model))
    }

    async fn list(&self, scope: RecapScope) -> AppResult<Vec<AttendanceRecord>> {
        let query = match scope {
            RecapScope::AllAccounts { start, end } => AttendanceEntity::find()
                .filter(attendance::Column::Date.gte(start))
                .filter(attendance::Column::Date.lt(end)),
            RecapScope::Account(account_id) => {
                AttendanceEntity::find().filter(attendance::Column::AccountId.eq(account_id))
            }
        };

        let models = query
            .order_by_desc(attendance::Column::CreatedAt)
            .order_by_desc(attendance::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(AttendanceRecord::from).collect())
    }

    async fn count_by_date_and_status(&self, date: NaiveDate, status: &str) -> AppResult<u64> {
        Ok(AttendanceEntity::find()
            .filter(attendance::Column::Date.eq(date))
            .filter(attendance::Column::Status.eq(status))
            .count(&self.db)
            .await?)
    }
}
