//! Account repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use super::is_unique_violation;
use crate::domain::{Account, UserRole};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account lookups. Accounts are only created inside a transaction, together
/// with their employee profile.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Account>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Account>> {
        let result = AccountEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Account::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        find_account_by_email(&self.db, email).await
    }

    async fn count(&self) -> AppResult<u64> {
        count_accounts(&self.db).await
    }
}

pub(crate) async fn count_accounts<C: ConnectionTrait>(conn: &C) -> AppResult<u64> {
    Ok(AccountEntity::find().count(conn).await?)
}

pub(crate) async fn find_account_by_email<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> AppResult<Option<Account>> {
    let result = AccountEntity::find()
        .filter(account::Column::Email.eq(email))
        .one(conn)
        .await?;

    Ok(result.map(Account::from))
}

/// Insert an account. A taken email surfaces as a conflict.
pub(crate) async fn insert_account<C: ConnectionTrait>(
    conn: &C,
    email: String,
    secret_hash: String,
    role: UserRole,
) -> AppResult<Account> {
    let active_model = ActiveModel {
        email: Set(email),
        secret_hash: Set(secret_hash),
        role: Set(role.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let model = active_model.insert(conn).await.map_err(|e| {
        if is_unique_violation(&e) {
            AppError::conflict("Email")
        } else {
            AppError::from(e)
        }
    })?;

    Ok(Account::from(model))
}
