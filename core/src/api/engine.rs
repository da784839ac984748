//! The lispy engine: one input line from text to result.

use tracing::debug;

use super::{EngineOptions, Error};
use crate::{
    evaluator::Evaluator,
    parser::{self, ParseTree},
    reader,
    values::Value,
};

/// Runs lines through parse, read, and evaluate.
///
/// Each call is independent: no value outlives the line that produced it.
///
/// # Example
///
/// ```
/// use lispy_core::api::{Engine, EngineOptions};
///
/// let engine = Engine::new(EngineOptions::default());
/// let result = engine.run("(* 6 7)").unwrap();
/// assert_eq!(result.to_string(), "42");
///
/// // Evaluation failures are values, not `Err`.
/// let result = engine.run("(/ 1 0)").unwrap();
/// assert!(result.is_error());
///
/// // Syntax errors are `Err`.
/// assert!(engine.run("(+ 1").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse a line into its tagged parse tree.
    pub fn parse(&self, source: &str) -> Result<ParseTree, Error> {
        let max_depth = self.options.default_parse_options.max_depth;
        Ok(parser::parse_with_max_depth(source, max_depth)?)
    }

    /// Parse and read a line without evaluating it.
    pub fn read(&self, source: &str) -> Result<Value, Error> {
        Ok(reader::read(&self.parse(source)?))
    }

    /// Evaluate an already-read value.
    pub fn evaluate(&self, value: Value) -> Value {
        let options = (&self.options.default_execution_options).into();
        Evaluator::new(options).eval(value)
    }

    /// Parse, read, and evaluate a line.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run(&self, source: &str) -> Result<Value, Error> {
        let value = self.read(source)?;
        let result = self.evaluate(value);
        debug!(%result, "evaluated line");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{ExecutionOptions, ParseOptions},
        parser::Span,
        values::LispError,
    };

    #[test]
    fn test_run_returns_value() {
        let engine = Engine::default();
        assert_eq!(engine.run("(+ 1 2 3)").unwrap(), Value::number(6));
        assert_eq!(engine.run("- 5").unwrap(), Value::number(-5));
    }

    #[test]
    fn test_run_returns_error_values_as_ok() {
        let engine = Engine::default();
        assert_eq!(
            engine.run("(/ 10 0)").unwrap(),
            Value::error(LispError::DivisionByZero)
        );
    }

    #[test]
    fn test_parse_failure_is_err() {
        let engine = Engine::default();
        let err = engine.run("(+ 1 2").unwrap_err();
        assert_eq!(err.source_text(), "(+ 1 2");
        assert_eq!(err.diagnostic().code.as_deref(), Some("P002"));
        assert_eq!(err.to_string(), "Parse error: Unclosed delimiter '('");
    }

    #[test]
    fn test_read_does_not_evaluate() {
        let engine = Engine::default();
        assert_eq!(
            engine.read("(/ 1 0)").unwrap(),
            Value::sexpr(vec![Value::sexpr(vec![
                Value::symbol("/"),
                Value::number(1),
                Value::number(0),
            ])])
        );
    }

    #[test]
    fn test_parse_depth_option() {
        let engine = Engine::new(EngineOptions {
            default_parse_options: ParseOptions { max_depth: 2 },
            ..Default::default()
        });
        assert!(engine.run("((1))").is_ok());
        let err = engine.run("(((1)))").unwrap_err();
        assert_eq!(err.diagnostic().code.as_deref(), Some("P004"));
        assert_eq!(err.diagnostic().span, Span::new(2, 3));
    }

    #[test]
    fn test_execution_depth_option() {
        let engine = Engine::new(EngineOptions {
            default_execution_options: ExecutionOptions { max_depth: 2 },
            ..Default::default()
        });
        assert!(engine.run("(+ 1 2)").unwrap().is_error());
        assert_eq!(engine.run("7").unwrap(), Value::number(7));
    }
}
