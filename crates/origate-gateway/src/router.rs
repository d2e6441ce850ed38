//! Axum router wiring.
//!
//! Exposes `/healthz` and `/metrics`; every route passes through the
//! cross-origin middleware, which is the boundary the core evaluator was
//! built for.

use axum::{
    extract::State,
    http::header,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::{app_state::AppState, cors};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics))
        .layer(middleware::from_fn_with_state(state.clone(), cors::apply))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn metrics(State(app): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        app.metrics().render(),
    )
}
