//! Errors raised while reading and translating a dig plan.

/// Error that can occur while translating a dig plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// A line did not split into exactly `direction distance extra`.
    #[error("line {line}: expected 3 whitespace-separated tokens, found {tokens}")]
    MalformedLine { line: usize, tokens: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
