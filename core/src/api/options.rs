//! Configuration options for the lispy engine.

use crate::{evaluator::EvaluatorOptions, parser::DEFAULT_MAX_DEPTH};

/// Configuration options for parsing.
///
/// # Example
///
/// ```
/// use lispy_core::api::ParseOptions;
///
/// let options = ParseOptions { max_depth: 64 };
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum parenthesis nesting accepted on a single line.
    ///
    /// Default: 500
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration options for evaluation.
///
/// # Example
///
/// ```
/// use lispy_core::api::ExecutionOptions;
///
/// let options = ExecutionOptions { max_depth: 500 };
/// ```
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            max_depth: EvaluatorOptions::default().max_depth,
        }
    }
}

impl From<&ExecutionOptions> for EvaluatorOptions {
    fn from(options: &ExecutionOptions) -> Self {
        Self {
            max_depth: options.max_depth,
        }
    }
}

/// Configuration options for the lispy engine.
///
/// # Example
///
/// ```
/// use lispy_core::api::{EngineOptions, ExecutionOptions, ParseOptions};
///
/// let options = EngineOptions {
///     default_parse_options: ParseOptions::default(),
///     default_execution_options: ExecutionOptions { max_depth: 500 },
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Options used by `Engine::parse()`.
    pub default_parse_options: ParseOptions,

    /// Options used by `Engine::evaluate()`.
    pub default_execution_options: ExecutionOptions,
}
