use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use framelabel_api::config::ServerConfig;
use framelabel_api::router::build_app_router;
use framelabel_api::state::AppState;
use framelabel_core::config::StorageConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "framelabel_api=debug,framelabel_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::parse();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Storage ---
    let storage =
        match StorageConfig::resolve(&config.frames_dir, config.annotations_dir.as_deref()) {
            Ok(storage) => storage,
            Err(e) => {
                tracing::error!(error = %e, "Invalid storage configuration");
                std::process::exit(1);
            }
        };
    tracing::info!(
        frames_dir = %storage.frames_dir.display(),
        annotations_dir = %storage.annotations_dir.display(),
        "Resolved storage directories"
    );

    // --- App state + router ---
    let state = AppState::new(&storage);
    let app = build_app_router(state, &config);

    // --- Start server ---
    let listener = tokio::net::TcpListener::bind(config.bind_target())
        .await
        .expect("Failed to bind to address");
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Starting server");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
