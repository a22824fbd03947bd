use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::CardApplication;
use super::evaluation::CardApplicationEvaluator;

/// Router exposing the evaluator over HTTP.
pub fn application_router(evaluator: Arc<CardApplicationEvaluator>) -> Router {
    Router::new()
        .route(
            "/api/v1/card-applications/evaluate",
            post(evaluate_handler),
        )
        .route("/api/v1/card-applications/lookups", get(lookups_handler))
        .with_state(evaluator)
}

pub(crate) async fn evaluate_handler(
    State(evaluator): State<Arc<CardApplicationEvaluator>>,
    Json(application): Json<CardApplication>,
) -> Response {
    let outcome = evaluator.assess(&application);
    (StatusCode::OK, Json(outcome)).into_response()
}

pub(crate) async fn lookups_handler(
    State(evaluator): State<Arc<CardApplicationEvaluator>>,
) -> Response {
    let payload = json!({ "lookup_count": evaluator.lookup_count() });
    (StatusCode::OK, Json(payload)).into_response()
}
