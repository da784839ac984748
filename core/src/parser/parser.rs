use pest::Parser;
use pest_derive::Parser;
use tracing::trace;

use crate::parser::{
    ParseTree, Span,
    error::{ParseError, ParseErrorKind, convert_pest_error},
};

/// Default limit on parenthesis nesting accepted by [`parse`].
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Hard ceiling on the nesting limit. Grammar matching, tree building and
/// reading all recurse once per level, so larger limits are clamped to this.
pub const MAX_NESTING_LIMIT: usize = 1000;

#[derive(Parser)]
#[grammar = "parser/lispy.pest"]
pub struct LispyParser;

/// Parse one line of input into a tagged parse tree.
pub fn parse(source: &str) -> Result<ParseTree, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse one line of input, rejecting parenthesis nesting deeper than
/// `max_depth` (at most [`MAX_NESTING_LIMIT`]) before the grammar ever
/// recurses into it.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<ParseTree, ParseError> {
    check_nesting(source, max_depth.min(MAX_NESTING_LIMIT))?;

    let mut pairs =
        LispyParser::parse(Rule::lispy, source).map_err(|e| convert_pest_error(e, source))?;
    let root = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing expected pair in rule".to_string(),
            },
            source.to_string(),
            Span::new(0, source.len()),
        )
    })?;

    let tree = ParseTree::from_root(root);
    trace!(children = tree.child_count(), "parsed line");
    Ok(tree)
}

fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for (offset, ch) in source.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                if depth > max_depth {
                    return Err(ParseError::new(
                        ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                        source.to_string(),
                        Span::new(offset, offset + 1),
                    ));
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}
