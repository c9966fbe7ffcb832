//! Top-level router: API routes plus the middleware stack.

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::catalog::catalog_routes;
use super::design::design_routes;
use super::mail::mail_routes;
use super::AppState;
use crate::config::ServerConfig;

/// All API routes, without middleware.
///
/// Tests drive this router directly with `oneshot`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(catalog_routes())
        .nest("/api/designs", design_routes())
        .merge(mail_routes())
        .with_state(state)
}

/// The API router wrapped in body limit, timeout, CORS and tracing layers.
pub fn app_router(state: AppState, config: &ServerConfig) -> Router {
    api_router(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

/// Configured origins when given; otherwise permissive outside production.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    } else if config.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::permissive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn production_without_origins_is_restrictive() {
        let config = ServerConfig {
            environment: Environment::Production,
            ..ServerConfig::default()
        };
        // Building the layer must not panic for any combination.
        let _ = cors_layer(&config);
    }

    #[test]
    fn listed_origins_are_accepted() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173, https://lessons.example".to_string()),
            ..ServerConfig::default()
        };
        assert_eq!(config.cors_origins_list().len(), 2);
        let _ = cors_layer(&config);
    }
}
