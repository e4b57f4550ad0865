use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde::Serialize;

/// Every way a `/summarize` call can fail, mapped onto an HTTP status
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Invalid language")]
    InvalidLanguage,

    #[error("Invalid YouTube URL")]
    InvalidYoutubeUrl,

    #[error("Transcript not available")]
    TranscriptUnavailable,

    /// Request body could not be extracted (bad JSON, missing field, wrong content type)
    #[error("{detail}")]
    BadBody { status: StatusCode, detail: String },

    #[error("Error occurred: {0}")]
    Upstream(eyre::Report),
}

/// JSON error body: `{"detail": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidUrl | ApiError::InvalidLanguage | ApiError::InvalidYoutubeUrl => StatusCode::BAD_REQUEST,
            ApiError::TranscriptUnavailable => StatusCode::NOT_FOUND,
            ApiError::BadBody { status, .. } => *status,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<eyre::Report> for ApiError {
    fn from(report: eyre::Report) -> Self {
        ApiError::Upstream(report)
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::BadBody {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // `{:#}` on the report keeps the whole cause chain on one line
        let detail = match &self {
            ApiError::Upstream(report) => format!("Error occurred: {report:#}"),
            other => other.to_string(),
        };
        if status.is_server_error() {
            error!("{status}: {detail}");
        }
        (status, Json(ErrorBody { detail })).into_response()
    }
}
