//! Notification handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::NotificationFeed;
use crate::errors::AppResult;
use crate::types::MessageResponse;

pub fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(list_notifications))
        .route("/notifications/read", post(mark_notifications_read))
}

/// Ten newest notifications and the unread total
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Recent notifications", body = NotificationFeed),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_notifications(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<NotificationFeed>> {
    let feed = state
        .notification_service
        .list_recent(current_user.account_id)
        .await?;

    Ok(Json(feed))
}

/// Mark all of the caller's notifications as read
#[utoipa::path(
    post,
    path = "/api/notifications/read",
    tag = "Notifications",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All notifications read", body = MessageResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn mark_notifications_read(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse>> {
    state
        .notification_service
        .mark_all_read(current_user.account_id)
        .await?;

    Ok(Json(MessageResponse::new("All notifications marked as read")))
}
