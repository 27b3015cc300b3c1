use std::fmt::Display;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// `NotFound` for a row addressed by id, e.g. "post 3 not found".
    pub fn missing(entity: &str, id: impl Display) -> Self {
        Self::NotFound(format!("{entity} {id} not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_names_entity_and_id() {
        assert_eq!(
            DomainError::missing("menu link", 9).to_string(),
            "not found: menu link 9 not found"
        );
    }
}
