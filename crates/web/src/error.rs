use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use storage::{error::StorageError, models::ScoreValidationError};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Web layer errors
///
/// Everything the caller can cause, including a failed lookup or write,
/// is reported as 400. Only list queries report storage failures as 500.
#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Validation(ValidationErrors),
    InvalidScore(ScoreValidationError),
    Storage {
        context: &'static str,
        source: StorageError,
    },
    Internal(StorageError),
}

impl WebError {
    /// A storage failure reported to the client with `context` as prefix.
    pub fn storage(context: &'static str, source: StorageError) -> Self {
        Self::Storage { context, source }
    }
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "{}", msg),
            Self::Validation(errors) => {
                let mut messages: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{}: {}", field, e.code))
                        })
                    })
                    .collect();
                messages.sort();
                write!(f, "{}", messages.join("\n"))
            }
            Self::InvalidScore(e) => write!(f, "{}", e),
            Self::Storage { context, source } => write!(f, "{}: {}", context, source),
            Self::Internal(e) => write!(f, "Internal server error: {}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status_code, error) = match &self {
            Self::Internal(e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            Self::Storage { .. } => {
                tracing::warn!("{}", self);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            _ => {
                tracing::debug!("Rejected request: {}", self);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        (status_code, Json(ErrorResponse { error })).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Internal(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<ScoreValidationError> for WebError {
    fn from(error: ScoreValidationError) -> Self {
        Self::InvalidScore(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type WebResult<T> = Result<T, WebError>;
