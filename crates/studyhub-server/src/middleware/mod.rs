//! HTTP middleware layers
//!
//! CORS policy derived from [`CorsConfig`] and request tracing. The CORS
//! layer mirrors the validation rule in [`Config::validate`]: credentials
//! are only ever granted to explicit origins, never to a wildcard, since
//! tower-http treats that combination as a request-time error.
//!
//! [`Config::validate`]: crate::config::Config::validate

use axum::http::{header, Method};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::config::CorsConfig;

const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Build the CORS layer for the configured origins
///
/// A wildcard configuration (empty list or a `*` entry) allows any origin
/// without credentials. Explicit origins that fail to parse are skipped.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_LANGUAGE,
            header::CONTENT_TYPE,
        ])
        .max_age(CORS_MAX_AGE);

    if config.is_wildcard() {
        return base.allow_origin(Any);
    }

    let origins: Vec<_> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
        .allow_credentials(config.allow_credentials)
}

/// Request tracing with per-request spans and response latency
pub fn tracing_layer(
) -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(tower_http::LatencyUnit::Micros),
        )
}
