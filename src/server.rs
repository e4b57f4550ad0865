use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::error::ApiError;
use crate::pipeline::Pipeline;
use crate::request::{SummarizeRequest, SummaryResponse};

/// Build the HTTP surface: `POST /summarize` and `GET /health`, open to any origin
pub fn router(pipeline: Pipeline) -> Router {
    // Credentials rule out `*`, so the request's origin, method and headers are echoed back
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/summarize", post(summarize))
        .route("/health", get(health))
        .layer(cors)
        .with_state(pipeline)
}

async fn summarize(
    State(pipeline): State<Pipeline>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Json(request) = payload?;
    let summary = pipeline.run(request).await?;
    Ok(Json(SummaryResponse { summary }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
