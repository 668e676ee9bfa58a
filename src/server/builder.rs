//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use crate::config::AppConfig;
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

/// Builder for creating the HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(AppConfig::from_env()?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Add custom routes to the server
    ///
    /// # Example
    ///
    /// ```ignore
    /// use axum::{Router, routing::get};
    ///
    /// let extra = Router::new().route("/version", get(|| async { "0.1.0" }));
    ///
    /// ServerBuilder::new()
    ///     .with_custom_routes(extra)
    ///     .build()?;
    /// ```
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        RestExposure::build_router(&self.config, self.custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the configured address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address()?;
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
