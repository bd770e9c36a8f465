//! HTTP adapters - REST API implementations.

pub mod mcda;

use std::time::Duration;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::AppConfig;

pub use mcda::{mcda_router, McdaAppState};

/// Assembles the full application router with middleware from configuration.
///
/// Layers:
/// - request timeout from `server.request_timeout_secs`
/// - CORS for the configured origins; permissive outside production when
///   none are configured
/// - request tracing when `features.enable_tracing` is set
pub fn app_router(config: &AppConfig) -> Router {
    let mut router = mcda_router()
        .with_state(McdaAppState::from_config(config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    if let Some(cors) = cors_layer(config) {
        router = router.layer(cors);
    }

    if config.features.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .server
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

    if origins.is_empty() {
        return (!config.is_production()).then(CorsLayer::permissive);
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
