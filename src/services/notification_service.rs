//! Notification service - Recent notifications and bulk mark-read.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::RECENT_NOTIFICATION_LIMIT;
use crate::domain::NotificationFeed;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait NotificationService: Send + Sync {
    /// The newest notifications of the account plus its total unread count.
    async fn list_recent(&self, account_id: i32) -> AppResult<NotificationFeed>;

    /// Mark every notification of the account as read. Idempotent.
    async fn mark_all_read(&self, account_id: i32) -> AppResult<()>;
}

/// Concrete implementation of NotificationService using Unit of Work.
pub struct NotificationManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> NotificationManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> NotificationService for NotificationManager<U> {
    async fn list_recent(&self, account_id: i32) -> AppResult<NotificationFeed> {
        let repo = self.uow.notifications();

        let (data, total_unread) = tokio::try_join!(
            repo.list_recent(account_id, RECENT_NOTIFICATION_LIMIT),
            repo.count_unread(account_id),
        )?;

        Ok(NotificationFeed { data, total_unread })
    }

    async fn mark_all_read(&self, account_id: i32) -> AppResult<()> {
        let updated = self.uow.notifications().mark_all_read(account_id).await?;
        tracing::debug!(account_id, updated, "Notifications marked as read");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockNotificationRepository;
    use crate::services::test_support::TestUnitOfWork;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_feed_uses_recent_limit() {
        let mut repo = MockNotificationRepository::new();
        repo.expect_list_recent()
            .with(eq(3), eq(10))
            .returning(|_, _| Ok(vec![]));
        repo.expect_count_unread().with(eq(3)).returning(|_| Ok(14));

        let service = NotificationManager::new(Arc::new(
            TestUnitOfWork::default().with_notifications(repo),
        ));
        let feed = service.list_recent(3).await.unwrap();

        assert!(feed.data.is_empty());
        assert_eq!(feed.total_unread, 14);
    }

    #[tokio::test]
    async fn test_mark_all_read_with_nothing_unread_succeeds() {
        let mut repo = MockNotificationRepository::new();
        repo.expect_mark_all_read().with(eq(3)).returning(|_| Ok(0));

        let service = NotificationManager::new(Arc::new(
            TestUnitOfWork::default().with_notifications(repo),
        ));

        assert!(service.mark_all_read(3).await.is_ok());
    }
}
