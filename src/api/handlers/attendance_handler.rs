//! Attendance handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::attendance::format_time;
use crate::domain::AttendanceRecord;
use crate::errors::AppResult;
use crate::types::Created;

/// Daily attendance submission
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitAttendanceRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "Present")]
    pub status: String,
    #[serde(default)]
    #[schema(example = "")]
    pub remark: String,
}

/// Submission acknowledgement
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitAttendanceResponse {
    #[schema(example = "Attendance recorded")]
    pub message: String,
    /// Recorded check-in time, `HH:MM:SS`
    #[schema(example = "08:12:45")]
    pub time_of_day: String,
    pub record: AttendanceRecord,
}

pub fn attendance_routes() -> Router<AppState> {
    Router::new().route("/attendance", get(recap).post(submit_attendance))
}

/// Submit today's attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    tag = "Attendance",
    security(("bearer_auth" = [])),
    request_body = SubmitAttendanceRequest,
    responses(
        (status = 201, description = "Attendance recorded", body = SubmitAttendanceResponse),
        (status = 400, description = "Already submitted today or validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Account has no employee profile")
    )
)]
pub async fn submit_attendance(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SubmitAttendanceRequest>,
) -> AppResult<Created<SubmitAttendanceResponse>> {
    let record = state
        .attendance_service
        .submit(current_user.account_id, payload.status, payload.remark)
        .await?;

    Ok(Created(SubmitAttendanceResponse {
        message: "Attendance recorded".to_string(),
        time_of_day: format_time(record.time_of_day),
        record,
    }))
}

/// Attendance recap: the current month for admins, own history for users
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = "Attendance",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Records, newest first", body = Vec<AttendanceRecord>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn recap(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AttendanceRecord>>> {
    let records = state
        .attendance_service
        .recap(current_user.account_id, current_user.role)
        .await?;

    Ok(Json(records))
}
