// src/application/error.rs
use crate::domain::{blog::ContentKind, errors::DomainError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("could not find a free {kind} slug after {attempts} attempts")]
    SlugCollisionExhausted { kind: ContentKind, attempts: u32 },

    #[error("image resize failed: {0}")]
    ResizeFailure(String),

    #[error("storage write failed: {0}")]
    StorageWriteFailure(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn resize_failure(msg: impl Into<String>) -> Self {
        Self::ResizeFailure(msg.into())
    }

    pub fn storage_write(msg: impl Into<String>) -> Self {
        Self::StorageWriteFailure(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Classify an error returned by a repository write. Constraint
    /// conflicts become `StorageWriteFailure`; the rest keep their meaning.
    pub fn from_write(err: DomainError) -> Self {
        match err {
            DomainError::Conflict(msg) => Self::StorageWriteFailure(msg),
            other => Self::Domain(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_conflicts_become_storage_failures() {
        let err = ApplicationError::from_write(DomainError::Conflict("slug already exists".into()));
        assert!(matches!(err, ApplicationError::StorageWriteFailure(msg) if msg == "slug already exists"));
    }

    #[test]
    fn persistence_failures_are_not_write_conflicts() {
        let err = ApplicationError::from_write(DomainError::Persistence("database is locked".into()));
        assert!(matches!(err, ApplicationError::Domain(DomainError::Persistence(_))));
    }

    #[test]
    fn missing_rows_stay_not_found() {
        let err = ApplicationError::from_write(DomainError::NotFound("post not found".into()));
        assert!(matches!(err, ApplicationError::Domain(DomainError::NotFound(_))));
    }

    #[test]
    fn exhausted_message_names_kind() {
        let err = ApplicationError::SlugCollisionExhausted {
            kind: ContentKind::Tag,
            attempts: 10,
        };
        assert_eq!(
            err.to_string(),
            "could not find a free tag slug after 10 attempts"
        );
    }
}
