// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, blogs},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{MethodRouter, get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Router wired from the full application configuration.
pub fn build_router(state: HttpState, config: &AppConfig) -> Router {
    assemble(
        state,
        config.allowed_origins(),
        config.rate_limit_enabled(),
    )
}

/// Router with CORS origins read from `ALLOWED_ORIGINS`; the limiter is
/// usually off for in-process callers that have no peer address.
pub fn build_router_with_rate_limiter(state: HttpState, enable_rate_limiter: bool) -> Router {
    assemble(
        state,
        &AppConfig::allowed_origins_from_env(),
        enable_rate_limiter,
    )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

/// Registers `path` both with and without its trailing slash.
fn both_slashes(router: Router, path: &str, handler: MethodRouter) -> Router {
    let trimmed = path.trim_end_matches('/');
    router
        .route(path, handler.clone())
        .route(trimmed, handler)
}

fn assemble(state: HttpState, allowed_origins: &[String], enable_rate_limiter: bool) -> Router {
    let collection = get(blogs::list_blogs).post(blogs::create_blog);
    let item = get(blogs::get_blog)
        .put(blogs::replace_blog)
        .patch(blogs::patch_blog)
        .delete(blogs::delete_blog);

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/admin/blogs", get(admin::admin_list_blogs))
        .route("/admin/blogs/delete", post(admin::admin_delete_selected));
    router = both_slashes(router, "/api/blog/", collection);
    router = both_slashes(router, "/api/blog/{id}/", item);

    router = router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(allowed_origins))
            .layer(CompressionLayer::new()),
    );

    if enable_rate_limiter {
        match rate_limit_layer() {
            Some(layer) => router = router.layer(layer),
            None => warn!("rate limiter configuration rejected; serving without it"),
        }
    }

    router.layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
