//! Error types for verse-core.

use thiserror::Error;

/// Result type alias using PracticeError.
pub type Result<T> = std::result::Result<T, PracticeError>;

/// Errors that can occur while grading or driving a practice session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PracticeError {
    #[error("target and attempt text are required")]
    EmptyInput,

    #[error("passage has {tokens} tokens, the limit is {limit}")]
    InputTooLong { tokens: usize, limit: usize },

    #[error("practice session is already complete")]
    SessionComplete,

    #[error("unknown chunk at pool index {index}")]
    UnknownChunk { index: usize },

    #[error("unknown citation segment {id}")]
    UnknownSegment { id: String },
}

impl PracticeError {
    /// Whether the error comes from driving a session in the wrong state
    /// rather than from bad input text.
    pub fn is_session_state(&self) -> bool {
        matches!(self, Self::SessionComplete)
    }
}
