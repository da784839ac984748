//! Lispy - a prefix arithmetic calculator written as S-expressions
//!
//! # Overview
//!
//! Each line is parsed into a tagged parse tree, read into a [`Value`], and
//! reduced by applying the builtins `+ - * /` left to right. Evaluation never
//! fails with `Err`: division by zero, unknown operators, and other mistakes
//! come back as [`Value::Error`] and print as `Error: ...`.
//!
//! # Quick Start
//!
//! ```
//! use lispy::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! let result = engine.run("(+ 1 (* 2 3))").unwrap();
//! assert_eq!(result.to_string(), "7");
//!
//! let result = engine.run("(/ 10 0)").unwrap();
//! assert_eq!(result.to_string(), "Error: Division By Zero!");
//! ```
//!
//! # Lower-level stages
//!
//! ```
//! use lispy::{evaluate, format, parser, read};
//!
//! let tree = parser::parse("- 10 1 2").unwrap();
//! let value = evaluate(read(&tree));
//! assert_eq!(format(&value), "7");
//! ```

// Re-export public API from lispy_core
pub use lispy_core::api::{
    Diagnostic, Engine, EngineOptions, Error, ExecutionOptions, ParseOptions, Severity,
};

pub use lispy_core::evaluator::{self, Builtin, Evaluator, EvaluatorOptions};
pub use lispy_core::parser::{self, ParseTree};
pub use lispy_core::{LispError, Value, evaluate, format, read};

mod error_renderer;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
