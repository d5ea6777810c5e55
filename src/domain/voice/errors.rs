//! Voice Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("Page number must be at least 1.")]
    InvalidPage(i64),

    #[error("Page size must be between 10 and 1000 (inclusive).")]
    InvalidPageSize(i64),
}
