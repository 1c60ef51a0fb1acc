//! Application assembly: configuration, upstream client, web server.

use crate::config::Config;
use crate::feddit::FedditApi;
use crate::state::AppState;
use crate::web::create_router;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Main application struct containing all necessary components.
pub struct App {
    config: Config,
    app_state: AppState,
}

impl App {
    /// Create a new App instance with all components initialized.
    pub fn new(config: Config) -> Result<Self> {
        let feddit = FedditApi::new(&config).context("Failed to create Feddit client")?;
        info!(
            base_url = %config.feddit_api_url,
            timeout_secs = config.timeout,
            max_connections = config.max_connections,
            keepalive_connections = config.keepalive_connections,
            cache_ttl_secs = config.cache_ttl,
            cache_size = config.cache_size,
            "Feddit client initialized"
        );

        let app_state = AppState::new(Arc::new(feddit), config.comment_limit);
        Ok(Self { config, app_state })
    }

    /// Serve until ctrl-c or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let addr = format!("0.0.0.0:{}", self.config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        info!(%addr, "web server listening");

        let router = create_router(self.app_state);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("web server exited with error")
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
