use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) | ApplicationError::StorageWriteFailure(msg) => {
                Self::new(StatusCode::CONFLICT, msg)
            }
            err @ ApplicationError::SlugCollisionExhausted { .. } => {
                Self::new(StatusCode::CONFLICT, err.to_string())
            }
            ApplicationError::ResizeFailure(msg) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            DomainError::Persistence(msg) => {
                tracing::error!(error = %msg, "persistence failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blog::ContentKind;

    fn status_of(err: ApplicationError) -> StatusCode {
        HttpError::from_error(err).status()
    }

    #[test]
    fn pipeline_failures_have_distinct_statuses() {
        assert_eq!(
            status_of(ApplicationError::SlugCollisionExhausted {
                kind: ContentKind::Tag,
                attempts: 10,
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(ApplicationError::storage_write("slug already exists")),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(ApplicationError::resize_failure("corrupt jpeg")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(ApplicationError::from_write(DomainError::Persistence(
                "database is locked".into()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ApplicationError::infrastructure(
                "posts/2024/05/cover.jpg: No space left on device (os error 28)"
            )),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_errors_keep_their_meaning() {
        assert_eq!(
            status_of(DomainError::NotFound("post 3 not found".into()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::Validation("title cannot be empty".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::Persistence("disk I/O error".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
