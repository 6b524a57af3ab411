//! Request-level middleware.

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use headers::{HeaderMapExt, UserAgent};
use std::net::SocketAddr;
use tracing::info;

/// Logs method, path, peer address and user agent of every incoming request.
///
/// Preflight `OPTIONS` requests pass through unlogged. The peer address is
/// only known when the server was started with connect info; otherwise it is
/// logged as `unknown`.
///
/// ```rust,ignore
/// use axum::{Router, middleware::from_fn};
/// use api::middleware::log_request;
///
/// let app = Router::new().layer(from_fn(log_request));
/// ```
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());

    let user_agent = req
        .headers()
        .typed_get::<UserAgent>()
        .map(|ua| ua.to_string())
        .unwrap_or_else(|| "unknown".into());

    info!(
        method = ?req.method(),
        path = %req.uri().path(),
        ip = %ip,
        user_agent = %user_agent,
        "Incoming request"
    );

    next.run(req).await
}
