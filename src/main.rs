use std::sync::Arc;

use job_ticker::config::{AppConfig, AppState};
use job_ticker::middleware::setup_logging;
use job_ticker::queue::QueueManager;
use job_ticker::routes::create_router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    let _log_guard = setup_logging();

    tracing::info!("Starting application...");

    // Load configuration
    let app_config = AppConfig::from_env()?;

    tracing::info!("Loaded configuration for environment: {}", app_config.environment);

    // Start the job queue worker
    let jobs = Arc::new(QueueManager::new(app_config.queue_config()));
    jobs.start().await;

    let app_state = AppState::new(jobs.clone(), app_config.clone());

    // Create router
    let app = create_router(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = app_config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "{} v{} is running on {}",
        app_config.app_name,
        app_config.app_version,
        addr
    );

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    match &served {
        Ok(()) => tracing::info!("Server stopped"),
        Err(e) => tracing::error!("Server error: {}", e),
    }

    // The worker is joined even when the server failed
    jobs.stop().await;

    served?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
