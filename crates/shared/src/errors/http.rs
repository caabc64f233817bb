use crate::errors::{repository::RepositoryError, service::ServiceError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failures surfaced to HTTP clients. The body is the underlying error text.
#[derive(Debug)]
pub enum HttpError {
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::Unavailable(_) => {
                    HttpError::ServiceUnavailable(repo_err.raw_message())
                }
                RepositoryError::Sqlx(_) => HttpError::Internal(repo_err.raw_message()),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, msg).into_response()
    }
}
