//! Attendance record database entity for SeaORM.
//!
//! `(account_id, date)` is covered by a unique index (see migrations).

use sea_orm::entity::prelude::*;

use crate::domain::AttendanceRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: i32,
    pub full_name: String,
    pub date: Date,
    pub time_of_day: Time,
    pub status: String,
    pub remark: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AttendanceRecord {
    fn from(model: Model) -> Self {
        AttendanceRecord {
            id: model.id,
            account_id: model.account_id,
            full_name: model.full_name,
            date: model.date,
            time_of_day: model.time_of_day,
            status: model.status,
            remark: model.remark,
            created_at: model.created_at,
        }
    }
}
