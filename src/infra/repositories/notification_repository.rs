//! Notification repository.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::entities::notification::{self, ActiveModel, Entity as NotificationEntity};
use crate::domain::{NewNotification, Notification};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: NewNotification) -> AppResult<Notification>;

    /// Up to `limit` notifications for the account, newest first
    async fn list_recent(&self, account_id: i32, limit: u64) -> AppResult<Vec<Notification>>;

    async fn count_unread(&self, account_id: i32) -> AppResult<u64>;

    /// Flag every unread notification of the account as read in one update.
    /// Returns the number of rows changed.
    async fn mark_all_read(&self, account_id: i32) -> AppResult<u64>;
}

/// Concrete implementation of NotificationRepository
pub struct NotificationStore {
    db: DatabaseConnection,
}

impl NotificationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationRepository for NotificationStore {
    async fn create(&self, notification: NewNotification) -> AppResult<Notification> {
        let active_model = ActiveModel {
            account_id: Set(notification.account_id),
            title: Set(notification.title),
            message: Set(notification.message),
            is_read: Set(false),
            created_at: Set(notification.created_at),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Notification::from(model))
    }

    async fn list_recent(&self, account_id: i32, limit: u64) -> AppResult<Vec<Notification>> {
        let models = NotificationEntity::find()
            .filter(notification::Column::AccountId.eq(account_id))
            .order_by_desc(notification::Column::CreatedAt)
            .order_by_desc(notification::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Notification::from).collect())
    }

    async fn count_unread(&self, account_id: i32) -> AppResult<u64> {
        Ok(NotificationEntity::find()
            .filter(notification::Column::AccountId.eq(account_id))
            .filter(notification::Column::IsRead.eq(false))
            .count(&self.db)
            .await?)
    }

    async fn mark_all_read(&self, account_id: i32) -> AppResult<u64> {
        let result = NotificationEntity::update_many()
            .col_expr(notification::Column::IsRead, Expr::value(true))
            .filter(notification::Column::AccountId.eq(account_id))
            .filter(notification::Column::IsRead.eq(false))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
