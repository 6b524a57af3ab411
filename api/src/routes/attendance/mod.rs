//! Attendance routes.
//!
//! - `POST /attendance/register` → self-service QR check-in
//! - `POST /attendance/manual` → staff roster batch
//! - `GET /attendance/sessions/{session_id}` → roster for a session
//! - `GET /attendance/roster?token=...` → roster for the session a token names

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

mod common;
mod get;
mod post;

pub use common::{RegisterReq, RegisterResponse, RosterQuery};
pub use get::{roster_by_token, session_roster};
pub use post::{apply_manual, register};

pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/manual", post(apply_manual))
        .route("/sessions/{session_id}", get(session_roster))
        .route("/roster", get(roster_by_token))
}
