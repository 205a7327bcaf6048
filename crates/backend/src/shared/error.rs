//! Error type of the HTTP handlers
//!
//! Services return `anyhow::Result`; the variants below travel inside the
//! `anyhow::Error` and are recovered by downcasting when the handler maps the
//! error to a response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contracts::domain::common::RecordId;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("record {0} not found")]
    NotFound(RecordId),
    #[error("{0}")]
    Missing(&'static str),
    #[error(transparent)]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::Missing(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<ApiError>() {
            Ok(api_error) => api_error,
            Err(other) => Self::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(e) => {
                tracing::error!("Request failed: {:#}", e);
                // internals stay in the log
                return (status, "Internal server error").into_response();
            }
            Self::Validation(message) => tracing::warn!("Rejected request: {}", message),
            Self::NotFound(_) | Self::Missing(_) => {}
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_recovers_the_variant() {
        let error: anyhow::Error = ApiError::Validation("End Date must be after Start Date".into()).into();
        let api: ApiError = error.into();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.to_string(), "End Date must be after Start Date");
    }

    #[test]
    fn foreign_errors_are_internal() {
        let api: ApiError = anyhow::anyhow!("disk full").into();
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_record_is_not_found() {
        let api: ApiError = anyhow::Error::from(ApiError::NotFound(9)).into();
        assert_eq!(api.status(), StatusCode::NOT_FOUND);
        assert_eq!(api.to_string(), "record 9 not found");
    }
}
