//! Dashboard handler.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::DashboardStats;
use crate::errors::AppResult;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard-stats", get(dashboard_stats))
}

/// Headcount and today's presence percentage
#[utoipa::path(
    get,
    path = "/api/dashboard-stats",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Today's presence summary", body = DashboardStats),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn dashboard_stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = state.dashboard_service.today_summary().await?;
    Ok(Json(stats))
}
