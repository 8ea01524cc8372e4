//! Errors raised by the text helpers.

use thiserror::Error;

use crate::error::{CommonError, ErrorSeverity};
use crate::impl_error_classification;

/// Failure surfaced by percent-mode formatting or pattern-based extraction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TextError {
    /// A parameter could not be coerced to the kind its specifier needs.
    #[error("Specifier %{specifier} expects {expected}, got {kind} '{value}'")]
    TypeMismatch {
        /// Specifier letter, without the `%`
        specifier: char,
        /// What the specifier accepts, e.g. "an integer"
        expected: &'static str,
        /// [`FormatArg::kind`](super::FormatArg::kind) of the parameter
        kind: &'static str,
        /// The parameter rendered as text
        value: String,
    },

    /// `%j` received something other than a plain data object.
    #[error("Specifier %j expects a plain data object, got {0}")]
    NotPlainData(&'static str),

    /// `%c` received an integer that is not a Unicode scalar value.
    #[error("Invalid character code: {0}")]
    InvalidCharCode(i64),

    /// A caller-supplied regular expression failed to compile.
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as supplied
        pattern: String,
        /// Compiler message from `regex`
        message: String,
    },

    /// Shared error raised inside a text helper, e.g. JSON serialization.
    #[error(transparent)]
    Common(#[from] CommonError),
}

/// Result alias for text helpers.
pub type TextResult<T> = Result<T, TextError>;

impl_error_classification!(TextError, Common,
    Self::TypeMismatch { .. } | Self::NotPlainData(_) | Self::InvalidCharCode(_) => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::InvalidPattern { .. } => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    }
);
