//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::pages;
use crate::state::AppState;

// Embed static files at compile time
const STYLE_CSS: &str = include_str!("../static/style.css");

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/algorithms", get(api::algorithms::list_algorithms))
        .route("/algorithms/{slug}", get(api::algorithms::get_algorithm))
        .route("/providers", get(api::providers::list_providers))
        .route("/circuits", post(api::circuits::build_circuit))
        .route("/run", post(api::run::run));

    let page_routes = Router::new()
        .route("/", get(pages::home::home))
        .route("/algorithms/deutsch-jozsa", get(pages::deutsch_jozsa::page))
        .route(
            "/algorithms/bernstein-vazirani",
            get(pages::bernstein_vazirani::page),
        )
        .route("/algorithms/entanglement", get(pages::entanglement::page))
        .route("/style.css", get(serve_style_css));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .fallback(pages::not_found)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve_style_css() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css")],
        STYLE_CSS,
    )
}
