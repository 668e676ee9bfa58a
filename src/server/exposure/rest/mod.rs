//! REST API exposure
//!
//! The REST exposure consumes the application configuration and produces an
//! Axum `Router` with every route, request tracing and the body size cap.

use crate::config::AppConfig;
use crate::server::router::build_api_routes;
use anyhow::Result;
use axum::{Json, Router, extract::DefaultBodyLimit, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration (body size cap)
    /// * `custom_routes` - Additional custom routes to merge
    pub fn build_router(config: &AppConfig, custom_routes: Vec<Router>) -> Result<Router> {
        config.validate()?;

        let mut app = Self::health_routes().merge(build_api_routes());

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.uploads.max_bytes)),
        ))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "person-api"
        }))
    }
}
