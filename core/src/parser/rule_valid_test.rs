// Tests with valid expressions for each rule in the grammar.

use crate::parser::{LispyParser, Rule};
use pest::Parser;
use pest::iterators::Pair;

fn contains_rule(pair: Pair<Rule>, target: Rule) -> bool {
    if pair.as_rule() == target {
        return true;
    }
    for inner in pair.into_inner() {
        if contains_rule(inner, target) {
            return true;
        }
    }
    false
}

macro_rules! rule_examples {
    ( $($rule:ident => [$($expr:expr),* $(,)?]),* $(,)? ) => {
        $(
            #[test]
            fn $rule() {
                let inputs = vec![$($expr),*];
                for input in inputs {
                    let result = LispyParser::parse(Rule::lispy, input)
                        .unwrap_or_else(|e| panic!("Failed to parse '{}': {}", input, e));
                    let root = result.into_iter().next().unwrap();
                    assert!(
                        contains_rule(root.clone(), Rule::$rule),
                        "Expected to find rule {:?} in parse tree for input '{}'",
                        Rule::$rule,
                        input
                    );
                }
            }
        )*
    };
}

rule_examples! {
    number => ["42", "-99", "0", "(+ 1 2)", "9223372036854775808"],
    symbol => ["+", "-", "*", "/", "foo", "(- 5)", "head", "<=", "&rest"],
    sexpr => ["()", "(5)", "(+ 1 2)", "(* (+ 1 2) (- 4 3))"],
    expr => ["1", "+", "()"],
    lparen => ["()"],
    rparen => ["(1)"],
    start => ["", "1"],
}

#[test]
fn negative_numeral_is_a_number_not_a_symbol() {
    let root = LispyParser::parse(Rule::lispy, "-5")
        .unwrap()
        .next()
        .unwrap();
    assert!(contains_rule(root.clone(), Rule::number));
    assert!(!contains_rule(root, Rule::symbol));
}

#[test]
fn lone_minus_is_a_symbol() {
    let root = LispyParser::parse(Rule::lispy, "(- 5)")
        .unwrap()
        .next()
        .unwrap();
    let symbols: Vec<&str> = root
        .into_inner()
        .flatten()
        .filter(|p| p.as_rule() == Rule::symbol)
        .map(|p| p.as_str())
        .collect();
    assert_eq!(symbols, vec!["-"]);
}

#[test]
fn invalid_inputs_are_rejected() {
    for input in ["(", ")", "(+ 1 2", "1 2)", "(+ 1 %)", "#"] {
        assert!(
            LispyParser::parse(Rule::lispy, input).is_err(),
            "Expected '{}' to be rejected",
            input
        );
    }
}
