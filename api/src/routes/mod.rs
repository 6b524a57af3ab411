//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/attendance` → QR check-in, manual roster updates and roster listings

use crate::routes::{attendance::attendance_routes, health::health_routes};
use crate::state::AppState;
use axum::Router;

pub mod attendance;
pub mod health;

/// Builds the complete application router for all HTTP endpoints.
///
/// State is attached here so the caller receives a ready-to-serve router.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/attendance", attendance_routes())
        .with_state(app_state)
}
