//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Venue search and lookup
        .route("/venues", get(handlers::search_venues))
        .route("/venues", post(handlers::create_venue))
        .route(
            "/venues/{venue_id}",
            get(handlers::get_venue)
                .put(handlers::update_venue)
                .delete(handlers::delete_venue),
        )
        .route("/venues/{venue_id}/calendar", get(handlers::get_calendar))
        // Bookings
        .route(
            "/venues/{venue_id}/bookings",
            post(handlers::create_booking),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
