//! Request-boundary errors and their HTTP mapping

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::analysis::AnalysisError;
use crate::classifier::ModelError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Text must be between 1 and {max} characters, got {len}")]
    TextLength { len: usize, max: usize },

    #[error("Maximum {0} texts per batch")]
    BatchTooLarge(usize),

    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("Model not loaded: {0}")]
    ModelUnavailable(#[from] ModelError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyText | Self::BatchTooLarge(_) => StatusCode::BAD_REQUEST,
            Self::TextLength { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidBody { status, .. } => *status,
            Self::ModelUnavailable(_) | Self::Analysis(_) | Self::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}
