// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_BLOG_SLUG: &str = "blogs_slug_key";

const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";
const SQLSTATE_STRING_TOO_LONG: &str = "22001";
const SQLSTATE_CHECK_VIOLATION: &str = "23514";

/// Translates driver errors into domain errors. The slug constraint maps to
/// the same conflict the in-memory store reports.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.constraint() == Some(CNT_BLOG_SLUG) {
                return DomainError::slug_taken();
            }

            match db_err.code().as_deref() {
                Some(SQLSTATE_UNIQUE_VIOLATION) => {
                    DomainError::Conflict("unique constraint violated".into())
                }
                Some(SQLSTATE_STRING_TOO_LONG) => {
                    DomainError::Validation("value too long for column".into())
                }
                Some(SQLSTATE_CHECK_VIOLATION) => {
                    DomainError::Validation("check constraint violated".into())
                }
                _ => DomainError::Persistence(db_err.message().to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
