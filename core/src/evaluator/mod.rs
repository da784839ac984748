//! Tree-walking evaluator for lispy values.
//!
//! An S-expression reduces by evaluating every child left to right,
//! returning the first error among them, and otherwise applying the builtin
//! named by its leading symbol to the remaining children. `()` evaluates to
//! itself and `(x)` to `x`. Every other value is self-evaluating.
//!
//! ## Design Principles
//!
//! - **Never panic**: All adversarial inputs must be handled gracefully
//! - **Errors are values**: failures come back as `Value::Error`, never as `Err`
//! - **Stack-safe**: Depth tracking prevents stack overflow from deeply nested expressions
//!
//! ## Example
//!
//! ```
//! use lispy_core::{evaluator, parser, reader};
//!
//! let tree = parser::parse("(+ 1 (* 2 3))").unwrap();
//! let result = evaluator::evaluate(reader::read(&tree));
//! assert_eq!(result.as_number(), Some(7));
//! ```

mod builtins;
mod eval;


pub use builtins::Builtin;
pub use eval::Evaluator;

use crate::values::Value;

/// Options controlling evaluation.
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

/// Evaluate a value with default limits.
pub fn evaluate(value: Value) -> Value {
    Evaluator::new(EvaluatorOptions::default()).eval(value)
}
