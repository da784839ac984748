//! Core evaluation logic.

use core::mem;

use tracing::{debug, trace};

use crate::{
    evaluator::{EvaluatorOptions, builtins::Builtin},
    values::{LispError, Value},
};

/// Tree-reducing evaluator.
pub struct Evaluator {
    options: EvaluatorOptions,
    depth: usize,
}

impl Evaluator {
    /// Create a new evaluator with the given options.
    pub fn new(options: EvaluatorOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Reduce `value` to its result.
    ///
    /// Numbers, symbols, and errors evaluate to themselves. Exceeding the
    /// depth limit yields an error value rather than overflowing the stack.
    pub fn eval(&mut self, value: Value) -> Value {
        if self.depth >= self.options.max_depth {
            return Value::error(LispError::DepthExceeded {
                depth: self.depth + 1,
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = match value {
            Value::SExpr(children) => self.eval_sexpr(children),
            other => other,
        };
        self.depth -= 1;

        result
    }

    fn eval_sexpr(&mut self, mut children: Vec<Value>) -> Value {
        // Children are reduced in place, strictly left to right.
        for child in children.iter_mut() {
            let unevaluated = mem::replace(child, Value::empty());
            *child = self.eval(unevaluated);
        }

        // First error wins; the rest of the expression is discarded.
        if let Some(index) = children.iter().position(Value::is_error) {
            trace!(index, "S-expression short-circuited on error");
            return children.swap_remove(index);
        }

        match children.len() {
            0 => Value::SExpr(children),
            1 => children.swap_remove(0),
            _ => {
                let operands = children.split_off(1);
                match children.swap_remove(0) {
                    Value::Symbol(symbol) => apply(&symbol, operands),
                    _ => Value::error(LispError::MalformedExpression),
                }
            }
        }
    }
}

fn apply(symbol: &str, operands: Vec<Value>) -> Value {
    let Some(builtin) = Builtin::from_symbol(symbol) else {
        return Value::error(LispError::BadOperator {
            symbol: symbol.to_string(),
        });
    };
    let result = builtin.apply(operands);
    debug!(op = builtin.symbol(), %result, "applied builtin");
    result
}
