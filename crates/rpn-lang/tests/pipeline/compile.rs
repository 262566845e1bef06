//! Tests for colon definitions and variable storage.

use rpn_lang::{Interpreter, Outcome, Value};

use super::{eval, eval_ok};

#[test]
fn a_definition_runs_like_its_inlined_body() {
    let mut interp = eval_ok(": DOUBLE DUP + ;");
    assert!(interp.word_exists("DOUBLE"));
    assert_eq!(interp.parse("5 DOUBLE"), Outcome::Ok);

    let mut inlined = Interpreter::new();
    inlined.parse("5 DUP +");
    assert_eq!(interp.stack().as_slice(), inlined.stack().as_slice());
}

#[test]
fn definitions_may_span_lines() {
    let mut interp = Interpreter::new();
    assert_eq!(interp.parse(": ADD2"), Outcome::Ok);
    assert!(interp.is_compiling());
    assert_eq!(interp.parse("2 +"), Outcome::Ok);
    assert_eq!(interp.parse(";"), Outcome::Ok);
    assert!(!interp.is_compiling());
    assert_eq!(interp.parse("5 ADD2"), Outcome::Ok);
    assert_eq!(interp.stack().peek_integer(1), Ok(7));
}

#[test]
fn referenced_words_resolve_late() {
    let mut interp = eval_ok(": ONE 1 ;");
    assert_eq!(interp.parse(": GREET ONE ;"), Outcome::Ok);
    // Redefining ONE after GREET was compiled changes what GREET does.
    assert_eq!(interp.parse(": ONE 2 ;"), Outcome::Ok);
    assert_eq!(interp.parse("GREET"), Outcome::Ok);
    assert_eq!(interp.stack().peek_integer(1), Ok(2));
}

#[test]
fn redefinition_silently_replaces() {
    let mut interp = eval_ok(": X 1 ;");
    assert_eq!(interp.parse(": X 2 ;"), Outcome::Ok);
    assert_eq!(interp.parse("X"), Outcome::Ok);
    assert_eq!(interp.stack().as_slice(), &[Value::integer(2)]);
}

#[test]
fn numeric_literals_are_collected() {
    let mut interp = eval_ok(": CONSTS 1 2.5 0x10 ;");
    assert_eq!(interp.parse("CONSTS"), Outcome::Ok);
    assert_eq!(
        interp.stack().as_slice(),
        &[Value::integer(1), Value::double(2.5), Value::integer(16)]
    );
}

#[test]
fn comments_are_allowed_while_compiling() {
    let mut interp = eval_ok(": T ( doubles the top ) DUP + ;");
    assert_eq!(interp.parse("4 T"), Outcome::Ok);
    assert_eq!(interp.stack().peek_integer(1), Ok(8));
}

#[test]
fn unknown_words_fail_fast_at_compile_time() {
    let (mut interp, outcome) = eval(": BAD FROB ;");
    assert_eq!(outcome, Outcome::ParseError);
    assert_eq!(
        interp.status(),
        "unrecognized word at compile time: 'FROB'"
    );
    // The pending definition is discarded and the interpreter stays usable.
    assert!(!interp.is_compiling());
    assert!(!interp.word_exists("BAD"));
    assert_eq!(interp.parse("1 2 +"), Outcome::Ok);
}

#[test]
fn definitions_can_call_definitions() {
    let mut interp = eval_ok(": DOUBLE DUP + ;");
    assert_eq!(interp.parse(": QUAD DOUBLE DOUBLE ;"), Outcome::Ok);
    assert_eq!(interp.parse("3 QUAD"), Outcome::Ok);
    assert_eq!(interp.stack().peek_integer(1), Ok(12));
}

#[test]
fn sto_installs_a_value_word() {
    let mut interp = eval_ok("42 .\" answer\" STO");
    assert!(interp.word_exists("answer"));
    assert_eq!(interp.parse("answer answer +"), Outcome::Ok);
    assert_eq!(interp.stack().as_slice(), &[Value::integer(84)]);
}

#[test]
fn sto_requires_a_string_name_on_top() {
    let (interp, outcome) = eval("42 7 STO");
    assert_eq!(outcome, Outcome::ParamError);
    assert_eq!(interp.status(), "STO: type error");
    assert_eq!(interp.stack().depth(), 2);
}
