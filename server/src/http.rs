//! HTTP server implementation for Proglog.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use proglog_kernel::log::Log;
use tokio::signal;

use crate::config::ServerConfig;
use crate::handlers::{
    AppState, handle_home, handle_read, handle_read_not_allowed, handle_write,
    handle_write_not_allowed,
};

/// HTTP server for the log service.
pub struct LogServer {
    log: Arc<Log>,
    config: ServerConfig,
}

impl LogServer {
    /// Create a new log server.
    pub fn new(log: Arc<Log>, config: ServerConfig) -> Self {
        Self { log, config }
    }

    /// Build the router serving `log`.
    ///
    /// Any other verb on a log path gets `405 Method Not Allowed` naming the
    /// single accepted verb in `Allow`; unknown paths get 404. HEAD needs its
    /// own entry on /log/read, since axum otherwise answers it with the GET
    /// handler.
    pub fn router(log: Arc<Log>) -> Router {
        Router::new()
            .route("/", get(handle_home))
            .route(
                "/log/read",
                get(handle_read)
                    .head(handle_read_not_allowed)
                    .fallback(handle_read_not_allowed),
            )
            .route(
                "/log/write",
                post(handle_write).fallback(handle_write_not_allowed),
            )
            .with_state(AppState { log })
    }

    /// Run the HTTP server until SIGINT or SIGTERM.
    pub async fn run(self) -> std::io::Result<()> {
        let app = Self::router(self.log);

        let listener = tokio::net::TcpListener::bind(self.config.addr).await?;
        tracing::info!("Starting Proglog HTTP server on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shut down gracefully");
        Ok(())
    }
}

/// Listen for SIGTERM and SIGINT (Ctrl+C).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
