use platform_api::{ApiError, FieldErrors};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HrError {
    #[error("Employee not found with id: {0}")]
    NotFound(i64),
    #[error("Employee with email {0} already exists")]
    DuplicateEmail(String),
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

pub type HrResult<T> = Result<T, HrError>;

impl HrError {
    /// Maps a unique-index violation raised by the store onto `DuplicateEmail`.
    pub(crate) fn from_write(err: DbErr, email: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                HrError::DuplicateEmail(email.to_string())
            }
            _ => HrError::Database(err),
        }
    }
}

impl From<HrError> for ApiError {
    fn from(err: HrError) -> Self {
        match err {
            HrError::NotFound(_) => ApiError::NotFound(err.to_string()),
            HrError::DuplicateEmail(_) => ApiError::Conflict(err.to_string()),
            HrError::Validation(fields) => ApiError::invalid_fields(fields),
            HrError::Database(db) => ApiError::internal(db.into()),
        }
    }
}
