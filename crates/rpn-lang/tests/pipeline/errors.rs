//! Tests for error reporting, status, and per-line aggregation.

use rpn_lang::{Outcome, Value};

use super::{assert_stack_eq, eval};

// ============================================================================
// Dictionary and validator errors
// ============================================================================

#[test]
fn unknown_words_are_dict_errors() {
    let (interp, outcome) = eval("FROB");
    assert_eq!(outcome, Outcome::DictError);
    assert_eq!(interp.status(), "not found 'FROB' in dict");
}

#[test]
fn operators_underflow_on_an_empty_stack() {
    let (interp, outcome) = eval("+");
    assert_eq!(outcome, Outcome::ParamError);
    assert_eq!(interp.status(), "+: stack underflow");
}

#[test]
fn validator_failures_leave_the_stack_untouched() {
    let (interp, outcome) = eval(".\" inverabcdefg\" INV");
    assert_eq!(outcome, Outcome::ParamError);
    assert_eq!(interp.status(), "INV: type error");
    assert_eq!(interp.stack().peek_string(1), Ok("inverabcdefg"));
}

// ============================================================================
// Unterminated trailing text
// ============================================================================

#[test]
fn unterminated_comment_is_a_parse_error() {
    let (interp, outcome) = eval("( test bad comment");
    assert_eq!(outcome, Outcome::ParseError);
    assert!(interp.status().contains("terminating ')'"));
}

#[test]
fn unterminated_string_is_a_parse_error() {
    let (interp, outcome) = eval(".\" test bad string");
    assert_eq!(outcome, Outcome::ParseError);
    assert!(interp.status().contains("terminating '\"'"));
}

#[test]
fn comments_are_discarded_mid_line() {
    assert_stack_eq("1 ( this is ignored ) 2 +", &[Value::integer(3)]);
}

// ============================================================================
// Status lifecycle and aggregation
// ============================================================================

#[test]
fn status_resets_at_the_next_parse() {
    let (mut interp, outcome) = eval("FROB");
    assert_eq!(outcome, Outcome::DictError);
    assert!(!interp.status().is_empty());

    assert_eq!(interp.parse("1 1 +"), Outcome::Ok);
    assert!(interp.status().is_empty());
}

#[test]
fn a_line_returns_its_worst_severity() {
    // The unknown word does not stop the line; the division failure later
    // outranks it.
    let (interp, outcome) = eval("FROB 1 0 /");
    assert_eq!(outcome, Outcome::EvalError);
    assert_eq!(interp.status(), "division by zero");
}

#[test]
fn evaluation_continues_after_a_dict_error() {
    let (interp, outcome) = eval("FROB 1 2 +");
    assert_eq!(outcome, Outcome::DictError);
    assert_eq!(interp.stack().as_slice(), &[Value::integer(3)]);
}

#[test]
fn a_parse_error_abandons_the_rest_of_the_line() {
    let (interp, outcome) = eval(".\" oops 1 2 3");
    assert_eq!(outcome, Outcome::ParseError);
    assert_eq!(interp.stack().depth(), 0);
}

#[test]
fn the_interpreter_stays_usable_after_every_failure() {
    let (mut interp, _) = eval("( bad");
    for line in ["FROB", "+", "1 0 /", "12abc"] {
        interp.parse(line);
    }
    assert_eq!(interp.parse("CLEAR 2 3 *"), Outcome::Ok);
    assert_eq!(interp.stack().as_slice(), &[Value::integer(6)]);
}
