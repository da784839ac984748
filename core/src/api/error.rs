//! Public error types for the lispy API.
//!
//! Only failures to parse a line are reported as `Err`. Evaluation failures
//! are ordinary `Value::Error` results.

use core::fmt;

use crate::parser::{ParseError, Span};

/// Public error type for all lispy operations.
#[derive(Debug)]
pub enum Error {
    /// The line could not be parsed.
    Parse {
        diagnostic: Diagnostic,
        source: String,
    },
}

impl Error {
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            Error::Parse { diagnostic, .. } => diagnostic,
        }
    }

    pub fn source_text(&self) -> &str {
        match self {
            Error::Parse { source, .. } => source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse { diagnostic, .. } => write!(f, "Parse error: {}", diagnostic.message),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse {
            diagnostic: err.to_diagnostic(),
            source: err.source,
        }
    }
}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
