use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::filters::FilterError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Resource not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] FilterError),

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("Database connection failed: {0}")]
    ConnectionProbe(sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::ConnectionProbe(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("rejected request: {}", self);
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_client_error() {
        let err = ApiError::from(FilterError::MissingRequiredParameter("name"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "missing required parameter `name`");
    }

    #[test]
    fn data_access_is_server_error() {
        let err = ApiError::from(sqlx::Error::PoolClosed);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let probe = ApiError::ConnectionProbe(sqlx::Error::PoolClosed);
        assert_eq!(probe.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(probe.to_string().starts_with("Database connection failed: "));
    }
}
