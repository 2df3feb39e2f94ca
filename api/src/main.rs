use std::net::SocketAddr;
use std::sync::Arc;

use ai::GeminiReviewer;
use api::{auth::middleware::log_request, routes::app, state::AppState};
use axum::middleware::from_fn;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;
use util::{config, paths};

#[tokio::main]
async fn main() {
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    if config::jwt_secret_is_default() {
        tracing::warn!("JWT_SECRET is not set; using the insecure development secret");
    }
    if config::gemini_api_key().is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; AI review requests will fail");
    }

    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
            std::process::exit(1);
        }
    };
    if let Err(e) = Migrator::up(&db, None).await {
        tracing::error!(error = %e, "Failed to apply migrations");
        std::process::exit(1);
    }

    let app_state = AppState::new(db, Arc::new(GeminiReviewer::from_config()));

    let app = app(app_state)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive());

    let addr = format!("{}:{}", config::host(), config::port());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(env = %config::env(), "Starting {} on http://{addr}", config::project_name());
    println!("Starting {} on http://{addr}", config::project_name());

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!(error = %e, "Server crashed");
    }
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let log_dir = paths::ensure_dir("logs").unwrap_or_else(|_| ".".into());

    let file_appender = rolling::daily(log_dir, log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = config::log_to_stdout().then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
    });

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
