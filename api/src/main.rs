use anyhow::Context;
use api::{middleware::log_request, routes::routes, state::AppState};
use axum::{Router, middleware::from_fn};
use db::repositories::AttendanceRecordRepository;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use services::purge::PurgeScheduler;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;
use util::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration and initialize logging
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    let db = db::connect().await.context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run migrations")?;

    let app_state = AppState::new(db.clone());

    let mut purge =
        PurgeScheduler::from_config(Arc::new(AttendanceRecordRepository::new(db.clone())));
    purge
        .start()
        .await
        .context("Failed to start attendance purge")?;

    let cors = CorsLayer::very_permissive();

    let app = Router::new()
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config::host(), config::port())
        .parse()
        .context("Invalid address")?;

    tracing::info!(
        "Starting {} ({}) on http://{}:{}",
        config::project_name(),
        config::env(),
        config::host(),
        config::port()
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind")?;

    let served = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await;

    if let Err(e) = purge.shutdown().await {
        tracing::error!(error = %e, "Failed to stop attendance purge");
    }

    served.context("Server crashed")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(true);

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config::log_to_stdout() {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
