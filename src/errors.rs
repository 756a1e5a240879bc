//! Error types shared across the crate.

/// Error produced when a pattern string cannot be parsed, uses an
/// unsupported construct, or resolves a character class to the empty set
/// under the active alphabet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at offset {offset}")]
pub struct PatternError {
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Byte offset into the pattern source where the problem was detected.
    pub offset: usize,
}

impl PatternError {
    pub(crate) fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

/// Errors that can occur while building or driving a generator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pattern is invalid or unsupported.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),
    /// `render_set` exhausted its iteration budget before collecting enough
    /// distinct strings.
    #[error("max iterations reached: {max_iterations}")]
    MaxIterationsReached {
        /// The budget that was exhausted.
        max_iterations: usize,
    },
    /// An argument failed validation.
    #[error("{0}")]
    Value(String),
}

pub type Result<T> = std::result::Result<T, Error>;
