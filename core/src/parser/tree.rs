//! Tagged parse tree handed from the grammar to the reader.
//!
//! Tags follow the shape produced by parser-combinator libraries: the root is
//! `>`, a rule with a single child is folded into that child with its own name
//! prefixed (`expr|number|regex`), terminals end in `regex`, and rules with
//! several children end in `>`. Literal parentheses are tagged `char`.
//!
//! Consumers recognise roles by substring membership, so a node tagged
//! `expr|sexpr|>` is at once an expression and an S-expression.

use core::fmt;

use pest::iterators::Pair;

use crate::parser::{Rule, Span};

/// Tag carried by the root of every tree.
pub const ROOT_TAG: &str = ">";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    pub tag: String,
    pub contents: String,
    pub span: Span,
    pub children: Vec<ParseTree>,
}

impl ParseTree {
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>, span: Span) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    pub fn node(tag: impl Into<String>, span: Span, children: Vec<ParseTree>) -> Self {
        Self {
            tag: tag.into(),
            contents: String::new(),
            span,
            children,
        }
    }

    /// True when `needle` occurs anywhere in this node's tag.
    pub fn has_tag(&self, needle: &str) -> bool {
        self.tag.contains(needle)
    }

    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn from_root(pair: Pair<'_, Rule>) -> Self {
        let span = pair.as_span().into();
        let children = pair.into_inner().map(Self::from_pair).collect();
        Self::node(ROOT_TAG, span, children)
    }

    fn from_pair(pair: Pair<'_, Rule>) -> Self {
        let span: Span = pair.as_span().into();
        let rule = pair.as_rule();
        match rule {
            Rule::lparen | Rule::rparen => Self::leaf("char", pair.as_str(), span),
            // Anchors match no text; they only mark the ends of the line.
            Rule::start | Rule::EOI => Self::leaf("regex", "", span),
            _ => {
                let contents = pair.as_str();
                let mut children: Vec<ParseTree> = pair.into_inner().map(Self::from_pair).collect();
                match children.len() {
                    0 => Self::leaf(format!("{:?}|regex", rule), contents, span),
                    1 => {
                        let mut child = children.remove(0);
                        child.tag = format!("{:?}|{}", rule, child.tag);
                        child
                    }
                    _ => Self::node(format!("{:?}|>", rule), span, children),
                }
            }
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.tag, indent = level * 2)?;
        if self.children.is_empty() {
            write!(f, " '{}'", self.contents)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_indented(f, level + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
