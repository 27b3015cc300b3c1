use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

/// Human readable message for a `UNIQUE constraint failed: <table>.<column>`
/// error raised by SQLite.
fn unique_message(message: &str) -> String {
    match message.rsplit_once(": ") {
        Some((_, column)) if column.ends_with(".slug") => "slug already exists".into(),
        Some((_, column)) => format!("{column} already exists"),
        None => "unique constraint violated".into(),
    }
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => DomainError::Conflict(unique_message(db_err.message())),
            ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced record not found".into())
            }
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                DomainError::Validation(db_err.message().to_string())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}
