use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// Errors raised by the helpers themselves.
///
/// Errors produced by caller-supplied functions are never wrapped in this type;
/// every combinator forwards them untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlamesError {
    #[error("[E{code:04}] {operation} called on an empty input")]
    EmptyInput { code: u16, operation: &'static str },

    #[error("[E{code:04}] Invalid parallelism: {value} (must be at least 1)")]
    InvalidParallelism { code: u16, value: usize },
}

impl FlamesError {
    /// Create an empty-input error for the named operation
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput {
            code: ErrorCode::EMPTY_INPUT,
            operation,
        }
    }

    /// Create an invalid-parallelism error
    pub fn invalid_parallelism(value: usize) -> Self {
        Self::InvalidParallelism {
            code: ErrorCode::INVALID_PARALLELISM,
            value,
        }
    }

    /// Get the numeric error code
    pub fn code(&self) -> u16 {
        match self {
            Self::EmptyInput { code, .. } | Self::InvalidParallelism { code, .. } => *code,
        }
    }

    /// Check whether this error reports an empty input
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }
}

/// Result alias defaulting to [`FlamesError`]
pub type Result<T, E = FlamesError> = std::result::Result<T, E>;
