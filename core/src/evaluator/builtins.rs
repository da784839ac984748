//! Arithmetic builtins.

use crate::values::{LispError, Value};

/// The builtin operators, looked up by symbol.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
}

impl Builtin {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Builtin::Add),
            "-" => Some(Builtin::Sub),
            "*" => Some(Builtin::Mul),
            "/" => Some(Builtin::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
        }
    }

    /// Fold the operands left to right, starting from the first.
    ///
    /// Every operand must be a number. `-` with a single operand negates it.
    /// Arithmetic wraps on overflow instead of panicking.
    pub fn apply(self, operands: Vec<Value>) -> Value {
        let mut numbers = Vec::with_capacity(operands.len());
        for operand in &operands {
            match operand.as_number() {
                Some(n) => numbers.push(n),
                None => return Value::error(LispError::TypeMismatch),
            }
        }

        let mut rest = numbers.into_iter();
        let Some(mut acc) = rest.next() else {
            return Value::error(LispError::MalformedExpression);
        };

        if self == Builtin::Sub && rest.len() == 0 {
            return Value::number(acc.wrapping_neg());
        }

        for n in rest {
            acc = match self.fold_step(acc, n) {
                Ok(acc) => acc,
                Err(err) => return Value::error(err),
            };
        }
        Value::number(acc)
    }

    fn fold_step(self, acc: i64, n: i64) -> Result<i64, LispError> {
        match self {
            Builtin::Add => Ok(acc.wrapping_add(n)),
            Builtin::Sub => Ok(acc.wrapping_sub(n)),
            Builtin::Mul => Ok(acc.wrapping_mul(n)),
            Builtin::Div => {
                if n == 0 {
                    Err(LispError::DivisionByZero)
                } else {
                    // Use wrapping_div to handle i64::MIN / -1 case
                    Ok(acc.wrapping_div(n))
                }
            }
        }
    }
}
