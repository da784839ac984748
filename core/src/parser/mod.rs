pub mod error;
pub mod parser;
mod syntax;
mod tree;

// Re-export the parser and rule enum for external use
pub use parser::LispyParser;
pub use parser::Rule;
pub use parser::{DEFAULT_MAX_DEPTH, MAX_NESTING_LIMIT, parse, parse_with_max_depth};

pub use error::{ParseError, ParseErrorKind};
pub use syntax::Span;
pub use tree::{ParseTree, ROOT_TAG};


#[cfg(test)]
mod rule_valid_test;
