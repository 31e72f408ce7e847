//! Application router: the API surface plus cross-cutting layers.

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::users::handlers::api_index;
use super::users::{user_routes, UserAppState};

/// Build the complete application router.
///
/// # Routes
/// - `GET /api` - Service banner
/// - `/api/users/*` - See [`user_routes`]
/// - anything else - Files under `public_dir`, when configured
pub fn build_router(state: UserAppState, server: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/api", get(api_index))
        .nest("/api/users", user_routes())
        .with_state(state);

    if let Some(dir) = &server.public_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// Explicit origins when configured; permissive in development otherwise.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        return if server.is_production() {
            CorsLayer::new()
        } else {
            CorsLayer::permissive()
        };
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
