//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    http::{header, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{problem_details, track_http_metrics};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Route layer so the matched path template is known
        .route_layer(middleware::from_fn(track_http_metrics))
        .layer(middleware::from_fn(problem_details))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let metrics = metrics::gather_metrics()
        .map_err(|e| AppError::Internal(format!("Failed to encode metrics: {}", e)))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        metrics,
    ))
}

async fn route_not_found() -> AppError {
    AppError::Http(StatusCode::NOT_FOUND)
}

async fn method_not_allowed() -> AppError {
    AppError::Http(StatusCode::METHOD_NOT_ALLOWED)
}

/// Guide and booking routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/guides",
            get(handlers::guide::list_all).post(handlers::guide::create),
        )
        .route("/guides_active", get(handlers::guide::list_active))
        .route(
            "/guides/{id}",
            get(handlers::guide::get)
                .put(handlers::guide::update)
                .delete(handlers::guide::delete),
        )
        .route("/bookings", post(handlers::booking::create))
}
