// src/domain/errors.rs
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
    /// Raised by stores when the `slug` uniqueness rule is violated.
    pub fn slug_taken() -> Self {
        Self::Conflict("slug already exists".into())
    }

    pub fn blog_not_found() -> Self {
        Self::NotFound("blog not found".into())
    }
}
