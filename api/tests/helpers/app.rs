use api::{routes::routes, state::AppState};
use axum::{Router, body::Body, http::Request, response::Response};
use db::models::member::MemberRole;
use db::test_utils::{fixtures, setup_test_db};
use sea_orm::DatabaseConnection;
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;

pub type TestApp = BoxCloneService<Request<Body>, Response, Infallible>;

/// Router over a fresh in-memory database. The connection is returned so
/// tests can seed and inspect it.
pub async fn make_test_app() -> (TestApp, DatabaseConnection) {
    let db = setup_test_db().await;
    let router = Router::new().nest("/api", routes(AppState::new(db.clone())));
    (router.into_service().boxed_clone(), db)
}

/// Category 1 "Swim", session 42 with token "ABC", members 7 (Ana) and
/// 9 (Bea) enrolled in that order, staff member 5 (Coach) enrolled too and
/// member 11 (Cid) enrolled elsewhere.
pub async fn seed_swim_club(db: &DatabaseConnection) {
    fixtures::category(db, 1, "Swim").await;
    fixtures::category(db, 2, "Run").await;
    fixtures::member(db, 7, "Ana", MemberRole::Standard).await;
    fixtures::member(db, 9, "Bea", MemberRole::Standard).await;
    fixtures::member(db, 5, "Coach", MemberRole::Staff).await;
    fixtures::member(db, 11, "Cid", MemberRole::Standard).await;
    fixtures::enroll(db, 7, 1).await;
    fixtures::enroll(db, 9, 1).await;
    fixtures::enroll(db, 5, 1).await;
    fixtures::enroll(db, 11, 2).await;
    fixtures::session(db, 42, 1, "ABC").await;
}
