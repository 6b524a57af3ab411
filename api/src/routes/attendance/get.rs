use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use services::attendance::MemberAttendanceView;

use super::common::RosterQuery;
use crate::{response::ApiResponse, state::AppState};

type RosterResponse = (StatusCode, Json<ApiResponse<Vec<MemberAttendanceView>>>);

/// GET /api/attendance/sessions/{session_id}
///
/// Lists every non-staff member enrolled in the session's category, in
/// enrollment order, with their attendance. An unknown session yields an
/// empty list.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "member_id": 7, "name": "Ana", "present": true, "origin_is_qr": true },
///     { "member_id": 9, "name": "Bea", "present": false, "origin_is_qr": false }
///   ],
///   "message": "Roster retrieved"
/// }
/// ```
pub async fn session_roster(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
) -> RosterResponse {
    roster_response(state.engine().list_for_session(session_id).await)
}

/// GET /api/attendance/roster?token=ABC
///
/// Same listing as `session_roster`, for the session the check-in token
/// resolves to. A missing or unknown token yields an empty list.
pub async fn roster_by_token(
    State(state): State<AppState>,
    Query(query): Query<RosterQuery>,
) -> RosterResponse {
    roster_response(state.engine().list_for_token(&query.token).await)
}

fn roster_response<E: std::fmt::Display>(
    result: Result<Vec<MemberAttendanceView>, E>,
) -> RosterResponse {
    match result {
        Ok(views) => (
            StatusCode::OK,
            Json(ApiResponse::success(views, "Roster retrieved")),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load roster");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to load roster")),
            )
        }
    }
}
