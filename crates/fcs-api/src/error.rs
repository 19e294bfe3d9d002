use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fcs_db::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body is not valid JSON for the endpoint
    #[error("invalid json")]
    MalformedInput(#[from] JsonRejection),
    /// The query string does not decode into the endpoint's filter
    #[error("invalid query")]
    InvalidQuery(#[from] QueryRejection),
    /// A required field is missing or blank, or a patch names no field
    #[error("{0}")]
    Validation(String),
    /// A referenced user or deck does not exist
    #[error("{0}")]
    InvalidReference(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Storage(#[source] StoreError),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_)
            | Self::InvalidQuery(_)
            | Self::Validation(_)
            | Self::InvalidReference(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { resource } => Self::NotFound(format!("{resource} not found")),
            StoreError::Conflict(msg) => Self::Conflict(msg),
            StoreError::InvalidReference(msg) => Self::InvalidReference(msg),
            err @ StoreError::Database(_) => Self::Storage(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                "internal server error".to_string()
            }
            Self::MalformedInput(rejection) => {
                tracing::debug!(rejection = %rejection.body_text(), "rejected request body");
                self.to_string()
            }
            Self::InvalidQuery(rejection) => {
                tracing::debug!(rejection = %rejection.body_text(), "rejected query string");
                self.to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
