pub mod health;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();
    let router = Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/resume",
            get(handlers::handle_get_resume)
                .post(handlers::handle_add_sections)
                .put(handlers::handle_replace_resume)
                .patch(handlers::handle_merge_resume),
        )
        .route(
            "/api/resume/:section",
            get(handlers::handle_get_section).delete(handlers::handle_delete_section),
        )
        .fallback(not_found)
        .with_state(state);

    apply_layers(router, &config)
}

/// Cross-cutting middleware, outermost first: tracing, CORS, security headers,
/// panic recovery, body limit.
pub fn apply_layers(router: Router, config: &Config) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(cors::Any)
                    .allow_headers(cors::Any)
                    .allow_methods([
                        Method::GET,
                        Method::POST,
                        Method::PUT,
                        Method::PATCH,
                        Method::DELETE,
                    ]),
            )
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("SAMEORIGIN"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::REFERRER_POLICY,
                HeaderValue::from_static("no-referrer"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_DNS_PREFETCH_CONTROL,
                HeaderValue::from_static("off"),
            ))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(DefaultBodyLimit::max(config.max_body_bytes)),
    )
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Something broke!" })),
    )
        .into_response()
}
