// src/domain/errors.rs
use thiserror::Error;

pub type SlugResult<T> = Result<T, SlugError>;

#[derive(Debug, Error)]
pub enum SlugError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl SlugError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
