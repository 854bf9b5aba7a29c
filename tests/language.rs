use calctree::{error::Error, evaluate_expression};

fn assert_value(src: &str, expected: f64) {
    match evaluate_expression(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate_expression(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_syntax_error(src: &str) {
    let e = assert_failure(src);
    assert!(e.is_syntax_error(), "expected a syntax error for {src:?}, got {e:?}");
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("8 - 5", 3.0);
    assert_value("10 / 4", 2.5);
    assert_value("42", 42.0);
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("1 + 2 * 3", 7.0);
    assert_value("2 * 2 * 2 - 5 + 1", 4.0);
    assert_value("1 + 5 - 2 * 2 * 2", -2.0);
    assert_value("8 - 6 / 2", 5.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * (3 + 4)", 14.0);
    assert_value("((1))", 1.0);
    assert_value("(1 + (2 * (3 - 1)))", 5.0);
    assert_value("10 - (4 - 2)", 8.0);
}

#[test]
fn left_associativity() {
    assert_value("10 - 4 - 2", 4.0);
    assert_value("16 / 2 / 2 / 2", 2.0);
    assert_value("1 - 1 - 1 - 1", -2.0);
}

#[test]
fn unary_minus() {
    assert_value("-2 * 3", -6.0);
    assert_value("2 * -3", -6.0);
    assert_value("--2", 2.0);
    assert_value("---2", -2.0);
    assert_value("-(1 + 2)", -3.0);
    assert_value("1 - -1", 2.0);
    assert_value("-2 - -2", 0.0);
}

#[test]
fn decimal_literals() {
    assert_value("1.5 + 1.5", 3.0);
    assert_value(".5 * 4", 2.0);
    assert_value("2. * 2", 4.0);
    assert_value("0.1 + 0.2", 0.1 + 0.2);
    assert_value("12.375", 12.375);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("  2   +   3 ", 5.0);
    assert_value("2+3", 5.0);
    assert_value("\t2\n*\r\n3 ", 6.0);
}

#[test]
fn division_by_zero_fails() {
    for src in ["5 / 0", "1 / (2 - 2)", "0 / 0", "1 / -0", "3 / 0.0"] {
        let e = assert_failure(src);
        assert!(e.is_division_by_zero(), "expected division by zero for {src:?}, got {e:?}");
    }
}

#[test]
fn dividing_zero_is_fine() {
    assert_value("0 / 5", 0.0);
}

#[test]
fn malformed_input_is_a_syntax_error() {
    assert_syntax_error("(1 + 2");
    assert_syntax_error("* 3");
    assert_syntax_error("1 +");
    assert_syntax_error("");
    assert_syntax_error("   ");
    assert_syntax_error("1 2");
    assert_syntax_error("(1 + 2))");
    assert_syntax_error("()");
    assert_syntax_error(")");
    assert_syntax_error("2 * / 3");
}

#[test]
fn unreadable_input_is_a_lex_error() {
    for src in ["1 + x", "2 ^ 3", "1 $", ".", "1 + ."] {
        let e = assert_failure(src);
        assert!(e.is_lex_error(), "expected a lexical error for {src:?}, got {e:?}");
    }
}

#[test]
fn evaluation_is_repeatable() {
    let src = "(1.25 - 3) * 8 / -2";
    let first = evaluate_expression(src).unwrap();
    let second = evaluate_expression(src).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, 7.0);
}

#[test]
fn error_messages_point_at_the_problem() {
    let e = assert_failure("1 + (2 * 3");
    assert_eq!(e.to_string(),
               "Error at position 4: Expected closing parenthesis ')' but none found.");

    let e = assert_failure("1 + 2 )");
    assert_eq!(e.to_string(),
               "Error at position 6: Extra tokens after expression. Check your input: ')'");

    let e = assert_failure("4 # 2");
    assert_eq!(e.to_string(), "Error at position 2: Unrecognized character '#'.");

    let e = assert_failure("8 / (4 - 4)");
    assert_eq!(e.to_string(), "Error: Division by zero.");
}
