//! Lowering of the tagged parse tree into [`Value`]s.
//!
//! Node roles are recognised by substring membership in the tag, so a node
//! tagged `expr|number|regex` is read as a number. Literal parentheses and
//! the `regex` anchor nodes at either end of a line carry no meaning and are
//! skipped. Nothing is evaluated here.

use tracing::trace;

use crate::{
    parser::ParseTree,
    values::{LispError, Value},
};

/// Tag of the start/end anchors, matched exactly: every terminal's tag also
/// ends in `regex`.
const ANCHOR_TAG: &str = "regex";

/// Lower a parse tree into a value tree.
pub fn read(tree: &ParseTree) -> Value {
    if tree.has_tag("number") {
        return read_number(&tree.contents);
    }
    if tree.has_tag("symbol") {
        return Value::symbol(tree.contents.as_str());
    }

    // The root, S-expressions, and any other interior node the grammar may
    // grow all lower to an S-expression of their meaningful children.
    let mut sexpr = Value::empty();
    for child in tree.children.iter().filter(|c| !is_structural(c)) {
        sexpr.push(read(child));
    }
    trace!(tag = %tree.tag, children = sexpr.len(), "read S-expression");
    sexpr
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(_) => Value::error(LispError::BadNumber {
            text: text.to_string(),
        }),
    }
}

fn is_structural(node: &ParseTree) -> bool {
    node.contents == "(" || node.contents == ")" || node.tag == ANCHOR_TAG
}
