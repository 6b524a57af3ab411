use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::attendance::{BatchResult, BatchSummary, ManualEntry, RegisterOutcome};

use super::common::{RegisterReq, RegisterResponse};
use crate::{response::ApiResponse, state::AppState};

/// POST /api/attendance/register
///
/// Self-service check-in with a scanned session token.
///
/// ### Request Body
/// ```json
/// { "token": "ABC", "member_id": 7 }
/// ```
///
/// ### Responses
/// - `200 OK` → registered
/// - `208 Already Reported` → the member already has a record for the session
/// - `400 Bad Request` → unknown token or member
/// - `403 Forbidden` → member not enrolled in the session's category
/// - `500 Internal Server Error` → storage failure
pub async fn register(State(state): State<AppState>, Json(body): Json<RegisterReq>) -> Response {
    match state
        .engine()
        .register_by_token(&body.token, body.member_id)
        .await
    {
        Ok(outcome) => {
            let status = status_for(outcome);
            let data = RegisterResponse { outcome };
            let response = if status.is_success() {
                ApiResponse::success(data, outcome.message())
            } else {
                ApiResponse::failure(data, outcome.message())
            };
            (status, Json(response)).into_response()
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error("Failed to register attendance")),
        )
            .into_response(),
    }
}

fn status_for(outcome: RegisterOutcome) -> StatusCode {
    match outcome {
        RegisterOutcome::Registered => StatusCode::OK,
        RegisterOutcome::AlreadyRegistered => StatusCode::ALREADY_REPORTED,
        RegisterOutcome::InvalidToken | RegisterOutcome::UnknownMember => StatusCode::BAD_REQUEST,
        RegisterOutcome::NotEligible => StatusCode::FORBIDDEN,
    }
}

/// POST /api/attendance/manual
///
/// Applies a staff-entered roster. Entries with an unknown token or member are
/// skipped and counted in the summary.
///
/// ### Request Body
/// ```json
/// [
///   { "member_id": 7, "token": "ABC", "present": true },
///   { "member_id": 9, "token": "ABC", "present": false }
/// ]
/// ```
///
/// ### Responses
/// - `200 OK` with the batch summary
/// - `500 Internal Server Error` with the failure reason; entries written
///   before the failure are kept
pub async fn apply_manual(
    State(state): State<AppState>,
    Json(entries): Json<Vec<ManualEntry>>,
) -> (StatusCode, Json<ApiResponse<BatchSummary>>) {
    match state.engine().apply_manual_batch(&entries).await {
        BatchResult::Success(summary) => (
            StatusCode::OK,
            Json(ApiResponse::success(summary, "Attendance updated")),
        ),
        BatchResult::Failure(reason) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!(
                "Failed to update attendance: {reason}"
            ))),
        ),
    }
}
