//! Error types for the significance-analysis domain.
//!
//! Every failure an analysis run can produce is one of the variants below.
//! Errors are local to a single invocation: the computation is deterministic,
//! so none of them is worth retrying without changed input.

use serde::{Deserialize, Serialize};

/// Top-level analysis error type
///
/// A run either yields a complete report or exactly one of these errors;
/// partial reports are never produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Empty, misaligned, non-finite or otherwise malformed input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The hypothesis test is mathematically undefined for the given samples
    #[error("Test undefined: {0}")]
    UndefinedTest(String),

    /// The caller asked for a test identifier the engine does not know
    #[error("Unsupported test type: {0}")]
    UnsupportedTestType(String),

    /// The baseline column is missing from the uploaded table
    #[error("Invalid baseline: column '{0}' not found")]
    InvalidBaseline(String),

    /// No comparison columns remain once the baseline is excluded
    #[error("Empty comparison set: {0}")]
    EmptyComparisonSet(String),

    /// A ranking was requested over an empty set of candidates
    #[error("Empty set: {0}")]
    EmptySet(String),
}

impl AnalysisError {
    /// Get the error code for this error
    ///
    /// Error codes are stable identifiers for programmatic error handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::UndefinedTest(_) => "UNDEFINED_TEST",
            Self::UnsupportedTestType(_) => "UNSUPPORTED_TEST_TYPE",
            Self::InvalidBaseline(_) => "INVALID_BASELINE",
            Self::EmptyComparisonSet(_) => "EMPTY_COMPARISON_SET",
            Self::EmptySet(_) => "EMPTY_SET",
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            Self::UndefinedTest(_) => 422,
            _ => 400,
        }
    }

    /// Analysis errors are never retryable: the same input always fails the same way.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Wire-level error body
///
/// Returned instead of a report whenever a run fails. Consumers treat the
/// presence of `error` as terminal for that run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Create an error body from any message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<AnalysisError> for ErrorResponse {
    fn from(error: AnalysisError) -> Self {
        Self::new(error.to_string())
    }
}

impl From<&AnalysisError> for ErrorResponse {
    fn from(error: &AnalysisError) -> Self {
        Self::new(error.to_string())
    }
}

/// Analysis-wide result type
pub type AnalysisResult<T> = Result<T, AnalysisError>;
