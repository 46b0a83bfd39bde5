//! Recent notifications, unread count and mark-read.

mod common;

use chrono::Duration;

use attendance_api::services::{AttendanceService, NotificationService, ServiceContainer};

use common::{at, setup, TestContext};

/// One late check-in per day for `days` consecutive days.
async fn late_days(ctx: &TestContext, account_id: i32, days: i64) {
    let start = at(2026, 10, 1, 8, 15, 0);
    for day in 0..days {
        ctx.set_clock(start + Duration::days(day));
        ctx.services
            .attendance()
            .submit(account_id, "Present".to_string(), String::new())
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_feed_is_capped_at_ten_newest() {
    let ctx = setup().await;
    let jane = ctx.register("jane@example.com", "Jane Doe").await;
    late_days(&ctx, jane.account_id, 12).await;

    let feed = ctx
        .services
        .notifications()
        .list_recent(jane.account_id)
        .await
        .unwrap();

    assert_eq!(feed.data.len(), 10);
    assert_eq!(feed.total_unread, 12);
    assert!(feed
        .data
        .windows(2)
        .all(|pair| pair[0].created_at > pair[1].created_at));
    assert!(feed.data.iter().all(|n| !n.is_read && n.title == "Late arrival"));
}

#[tokio::test]
async fn test_mark_all_read_is_idempotent() {
    let ctx = setup().await;
    let jane = ctx.register("jane@example.com", "Jane Doe").await;
    late_days(&ctx, jane.account_id, 3).await;
    let notifications = ctx.services.notifications();

    notifications.mark_all_read(jane.account_id).await.unwrap();
    let feed = notifications.list_recent(jane.account_id).await.unwrap();
    assert_eq!(feed.total_unread, 0);
    assert_eq!(feed.data.len(), 3);
    assert!(feed.data.iter().all(|n| n.is_read));

    notifications.mark_all_read(jane.account_id).await.unwrap();
    let feed = notifications.list_recent(jane.account_id).await.unwrap();
    assert_eq!(feed.total_unread, 0);
    assert_eq!(feed.data.len(), 3);
}

#[tokio::test]
async fn test_mark_all_read_only_touches_owner() {
    let ctx = setup().await;
    let jane = ctx.register("jane@example.com", "Jane Doe").await;
    let budi = ctx.register("budi@example.com", "Budi Santoso").await;
    late_days(&ctx, jane.account_id, 2).await;
    late_days(&ctx, budi.account_id, 2).await;
    let notifications = ctx.services.notifications();

    notifications.mark_all_read(jane.account_id).await.unwrap();

    let budi_feed = notifications.list_recent(budi.account_id).await.unwrap();
    assert_eq!(budi_feed.total_unread, 2);
    assert!(budi_feed.data.iter().all(|n| n.account_id == budi.account_id));
}

#[tokio::test]
async fn test_empty_feed() {
    let ctx = setup().await;
    let jane = ctx.register("jane@example.com", "Jane Doe").await;
    let notifications = ctx.services.notifications();

    notifications.mark_all_read(jane.account_id).await.unwrap();
    let feed = notifications.list_recent(jane.account_id).await.unwrap();

    assert!(feed.data.is_empty());
    assert_eq!(feed.total_unread, 0);
}
