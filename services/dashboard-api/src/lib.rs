//! Salesboard Dashboard API
//!
//! Thin read-only HTTP front door over the dashboard report parser.

use axum::{extract::State, http::Method, response::IntoResponse, routing::get, Router};
use salesboard_utils::{AppConfig, GridSource, ReportParser};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;

use handlers::{detailed_health_check, health_check};
use metrics::ApiMetrics;
use middleware::request_id_middleware;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<GridSource>,
    pub parser: ReportParser,
    pub metrics: ApiMetrics,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(source: GridSource, config: AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            source: Arc::new(source),
            parser: ReportParser::new(),
            metrics: ApiMetrics::new()?,
            config,
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.timeout_seconds);

    Router::new()
        // Health check endpoints
        .route("/health", get(health_check))
        .route("/health/detailed", get(detailed_health_check))
        .route("/metrics", get(metrics_handler))

        // API routes
        .nest("/api", routes::create_api_routes())

        // Middleware stack
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET])
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(timeout))
                .layer(axum::middleware::from_fn(request_id_middleware)),
        )

        // Application state
        .with_state(state)
}

async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.render()
}
