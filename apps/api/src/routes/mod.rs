pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::puzzle::handlers;
use crate::state::AppState;

/// Only the configured front-end origin may call the API from a browser.
fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .with_context(|| format!("ALLOWED_ORIGIN '{allowed_origin}' is not a valid header value"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

pub fn build_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config.allowed_origin)?;

    Ok(Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .layer(cors)
        .with_state(state))
}
