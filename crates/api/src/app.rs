use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, password_rate_limit_middleware,
    security_headers_middleware, trace_id, RateLimiterState,
};
use crate::routes::{chat, events, guests, health, sites};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub password_limiter: Option<Arc<RateLimiterState>>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    // Throttle password attempts if enabled (password_attempts_per_minute > 0)
    let password_limiter = if config.security.password_attempts_per_minute > 0 {
        Some(Arc::new(RateLimiterState::new(
            config.security.password_attempts_per_minute,
        )))
    } else {
        None
    };

    let state = AppState {
        pool,
        config: config.clone(),
        password_limiter,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Guest-facing site routes (v1). All public: access control is the
    // decision carried in the response, not an auth layer.
    let site_routes = Router::new()
        .route("/api/v1/sites/:slug", get(sites::get_site))
        .route("/api/v1/sites/:slug/events", get(events::list_events))
        .route(
            "/api/v1/sites/:slug/guests/:guest_id/rsvp",
            post(guests::submit_rsvp),
        )
        .route("/api/v1/sites/:slug/chat", post(chat::chat_message));

    // The password route is the one brute-forceable surface; throttle it
    let password_routes = Router::new()
        .route("/api/v1/sites/:slug/password", post(sites::verify_password))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            password_rate_limit_middleware,
        ));

    // Public operational routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(site_routes)
        .merge(password_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware)) // Security headers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
