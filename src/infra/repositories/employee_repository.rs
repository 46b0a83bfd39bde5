//! Employee profile repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::{Employee, EmployeeDetails};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Profile owned by an account, if any
    async fn find_by_account(&self, account_id: i32) -> AppResult<Option<Employee>>;

    /// All profiles in insertion order
    async fn list(&self) -> AppResult<Vec<Employee>>;

    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_account(&self, account_id: i32) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find()
            .filter(employee::Column::AccountId.eq(account_id))
            .one(&self.db)
            .await?;

        Ok(result.map(Employee::from))
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(EmployeeEntity::find().count(&self.db).await?)
    }
}

pub(crate) async fn insert_employee<C: ConnectionTrait>(
    conn: &C,
    account_id: i32,
    details: EmployeeDetails,
) -> AppResult<Employee> {
    let active_model = ActiveModel {
        account_id: Set(account_id),
        employee_number: Set(details.employee_number),
        full_name: Set(details.full_name),
        job_title: Set(details.job_title),
        division: Set(details.division),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let model = active_model.insert(conn).await?;
    Ok(Employee::from(model))
}
