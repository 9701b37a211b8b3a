//! strand-api - HTTP API server for strand

use std::sync::Arc;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use strand_api::config::{LogConfig, LogFormat, ServerConfig};
use strand_api::{build_router, AppState};
use strand_core::defaults;
use strand_store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let log_config = LogConfig::from_env();
    let _file_guard = init_tracing(&log_config);

    info!(
        log_format = ?log_config.format,
        log_file = log_config
            .file
            .as_deref()
            .and_then(|p| p.to_str())
            .unwrap_or("(stdout)"),
        "Logging initialized"
    );

    let config = ServerConfig::from_env();
    info!(
        origins = config.allowed_origins.len(),
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    let state = AppState::new(Arc::new(MemoryStore::new()));
    let app = build_router(state, &config);

    let addr = config.bind_addr()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Install the global subscriber.
///
/// Returns the file writer guard, which must live for the whole process when
/// `LOG_FILE` is set.
fn init_tracing(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| defaults::LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(env_filter);

    if let Some(ref path) = config.file {
        let file_dir = path.parent().unwrap_or(std::path::Path::new("."));
        let file_name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(defaults::LOG_FILE_NAME);
        let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        match config.format {
            LogFormat::Json => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking),
                )
                .init(),
            LogFormat::Text => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        // no ANSI in files unless forced
                        .with_ansi(config.ansi.unwrap_or(false)),
                )
                .init(),
        }
        Some(guard)
    } else {
        match config.format {
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json())
                .init(),
            LogFormat::Text => {
                let mut layer = tracing_subscriber::fmt::layer();
                if let Some(ansi) = config.ansi {
                    layer = layer.with_ansi(ansi);
                }
                registry.with(layer).init();
            }
        }
        None
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
