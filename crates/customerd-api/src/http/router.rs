//! Axum router configuration with middleware.
//!
//! `POST /customers` creates; `GET`/`PUT`/`DELETE /customers/{id}` read,
//! update and delete. Any other method on those paths, and any other path,
//! answers 404; method-not-allowed is not distinguished from not-found.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/customers",
            post(handlers::customer::create_customer).fallback(not_found),
        )
        .route(
            "/customers/{id}",
            get(handlers::customer::get_customer)
                .put(handlers::customer::update_customer)
                .delete(handlers::customer::delete_customer)
                // axum would otherwise answer HEAD with the GET handler
                .head(not_found)
                .fallback(not_found),
        )
        .route("/health", get(health_check))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}

/// GET /health - Simple liveness probe.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
