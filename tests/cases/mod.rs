use once_cell::sync::Lazy;

pub struct TestCase {
    pub name: &'static str,
    pub input: &'static str,
    pub printed: &'static str,
}

pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "simple_addition",
            input: "(+ 1 2)",
            printed: "3",
        },
        TestCase {
            name: "top_level_without_parentheses",
            input: "+ 5 6",
            printed: "11",
        },
        TestCase {
            name: "variadic_addition",
            input: "(+ 1 2 3)",
            printed: "6",
        },
        TestCase {
            name: "variadic_multiplication",
            input: "(* 2 3 4)",
            printed: "24",
        },
        TestCase {
            name: "left_fold_subtraction",
            input: "(- 10 1 2)",
            printed: "7",
        },
        TestCase {
            name: "left_fold_division",
            input: "(/ 100 10 5)",
            printed: "2",
        },
        TestCase {
            name: "unary_negation",
            input: "(- 5)",
            printed: "-5",
        },
        TestCase {
            name: "double_negation",
            input: "(- (- 5))",
            printed: "5",
        },
        TestCase {
            name: "nested",
            input: "(* (+ 1 2) (- 10 (/ 8 2)))",
            printed: "18",
        },
        TestCase {
            name: "negative_literals",
            input: "(+ -1 -2)",
            printed: "-3",
        },
        TestCase {
            name: "truncating_division",
            input: "(/ -7 2)",
            printed: "-3",
        },
        TestCase {
            name: "empty_sexpr",
            input: "()",
            printed: "()",
        },
        TestCase {
            name: "singleton_elision",
            input: "(5)",
            printed: "5",
        },
        TestCase {
            name: "bare_number",
            input: "42",
            printed: "42",
        },
        TestCase {
            name: "bare_symbol",
            input: "foo",
            printed: "foo",
        },
        TestCase {
            name: "multi_line_whitespace",
            input: "(+ 1\n   2)",
            printed: "3",
        },
        TestCase {
            name: "division_by_zero",
            input: "(/ 10 0)",
            printed: "Error: Division By Zero!",
        },
        TestCase {
            name: "division_by_later_zero",
            input: "(/ 10 2 0)",
            printed: "Error: Division By Zero!",
        },
        TestCase {
            name: "type_mismatch",
            input: "(+ 1 (/ 4 2) foo)",
            printed: "Error: Cannot operate on non-number!",
        },
        TestCase {
            name: "first_error_wins",
            input: "(+ (/ 1 0) (bar 2 0))",
            printed: "Error: Division By Zero!",
        },
        TestCase {
            name: "malformed_expression",
            input: "(5 + 2)",
            printed: "Error: S-expression Does not start with symbol!",
        },
        TestCase {
            name: "bad_operator",
            input: "(mod 1 2)",
            printed: "Error: Invalid Operator! 'mod'",
        },
        TestCase {
            name: "bad_number",
            input: "(+ 1 12345678901234567890)",
            printed: "Error: Invalid Number! '12345678901234567890'",
        },
    ]
});
