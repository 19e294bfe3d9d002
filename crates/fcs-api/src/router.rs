use axum::{Json, Router, http::StatusCode, middleware, response::IntoResponse};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    config::Environment,
    deck, flashcard, health,
    metrics::track_metrics,
    middleware::{
        cors::create_cors_layer, request_id::request_id_middleware,
        security_headers::security_headers_middleware,
    },
    state::ApiState,
    user,
};

/// All resource routes, without middleware.
pub fn router() -> Router<ApiState> {
    Router::new()
        .merge(health::routes())
        .merge(user::routes())
        .merge(deck::routes())
        .merge(flashcard::routes())
        .fallback(handler_404)
}

/// The resource routes with state attached and the middleware stack applied.
pub fn app(state: ApiState, allowed_origins: &[String]) -> Router {
    let environment = state.environment;
    with_middleware(router().with_state(state), environment, allowed_origins)
}

/// Wrap fully built routes in the middleware stack.
///
/// The request ID layer is outermost so the trace and metrics layers run
/// inside its span. Routes merged in before this call (such as `/metrics`)
/// get the same headers as the resource routes.
pub fn with_middleware(
    routes: Router,
    environment: Environment,
    allowed_origins: &[String],
) -> Router {
    routes
        .layer(middleware::from_fn(move |req, next| {
            security_headers_middleware(environment, req, next)
        }))
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer(allowed_origins))
        .layer(middleware::from_fn(request_id_middleware))
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "the requested resource was not found" })),
    )
}
