use crate::values::LispError;

/// A lispy value.
///
/// An `SExpr` exclusively owns its children, so a value is always a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Error(LispError),
    Symbol(String),
    SExpr(Vec<Value>),
}

impl Value {
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn error(err: LispError) -> Self {
        Value::Error(err)
    }

    pub fn sexpr(children: Vec<Value>) -> Self {
        Value::SExpr(children)
    }

    /// The empty S-expression, `()`.
    pub fn empty() -> Self {
        Value::SExpr(Vec::new())
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&LispError> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Number of children of an S-expression; zero for every other kind.
    pub fn len(&self) -> usize {
        match self {
            Value::SExpr(children) => children.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `child` to an S-expression. Other kinds are left untouched and
    /// `child` is dropped.
    pub fn push(&mut self, child: Value) {
        if let Value::SExpr(children) = self {
            children.push(child);
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<LispError> for Value {
    fn from(err: LispError) -> Self {
        Value::Error(err)
    }
}
