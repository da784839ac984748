//! Error values.
//!
//! Errors are ordinary values: they are produced by the reader or evaluator,
//! returned in place of a result, and propagate unchanged through any
//! enclosing S-expression. The first one encountered wins.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LispError {
    /// Numeral outside the range of `i64`.
    #[error("Invalid Number! '{text}'")]
    BadNumber { text: String },

    /// Operator position holds a symbol that is not a builtin.
    #[error("Invalid Operator! '{symbol}'")]
    BadOperator { symbol: String },

    /// A builtin received an operand that is not a number.
    #[error("Cannot operate on non-number!")]
    TypeMismatch,

    #[error("Division By Zero!")]
    DivisionByZero,

    /// The first element of an S-expression is not a symbol.
    #[error("S-expression Does not start with symbol!")]
    MalformedExpression,

    /// Evaluation nested deeper than the configured limit.
    #[error("Evaluation depth {depth} exceeds maximum of {max_depth}")]
    DepthExceeded { depth: usize, max_depth: usize },
}
