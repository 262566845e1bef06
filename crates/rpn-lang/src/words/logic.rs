//! Comparison, boolean/bitwise, and conditional words.
//!
//! Equality is tag-strict: an Integer and a Double that are numerically equal
//! compare unequal. `AND`/`OR`/`NOT`/`XOR` are boolean on Booleans and
//! bitwise on Integers.

use std::cmp::Ordering;

use rpn_core::Value;

use crate::dictionary::{Dictionary, NativeBody, WordDefinition};
use crate::interpreter::Interpreter;
use crate::outcome::{WordError, WordResult};
use crate::validator::{ParamType, Validator};

fn ordered2() -> Validator {
    Validator::any_of(vec![
        Validator::types(&[ParamType::Number, ParamType::Number]),
        Validator::types(&[ParamType::String, ParamType::String]),
    ])
}

fn logical2() -> Validator {
    Validator::any_of(vec![
        Validator::types(&[ParamType::Boolean, ParamType::Boolean]),
        Validator::types(&[ParamType::Integer, ParamType::Integer]),
    ])
}

fn pop_pair(interp: &mut Interpreter) -> Result<(Value, Value), WordError> {
    let y = interp.stack_mut().pop()?;
    let x = interp.stack_mut().pop()?;
    Ok((x, y))
}

fn eq(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let (x, y) = pop_pair(interp)?;
    interp.stack_mut().push(Value::boolean(x == y));
    Ok(())
}

fn ne(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let (x, y) = pop_pair(interp)?;
    interp.stack_mut().push(Value::boolean(x != y));
    Ok(())
}

fn compare(interp: &mut Interpreter) -> Result<Ordering, WordError> {
    let (x, y) = pop_pair(interp)?;
    match (&x, &y) {
        (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
        (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),
        _ => {
            let a = x
                .as_double()
                .ok_or_else(|| WordError::eval("number expected"))?;
            let b = y
                .as_double()
                .ok_or_else(|| WordError::eval("number expected"))?;
            a.partial_cmp(&b)
                .ok_or_else(|| WordError::eval("unordered comparison"))
        }
    }
}

macro_rules! ordering_words {
    ($(($name:ident, $pred:expr)),* $(,)?) => {
        $(
            fn $name(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
                let ord = compare(interp)?;
                interp.stack_mut().push(Value::boolean($pred(ord)));
                Ok(())
            }
        )*
    };
}

ordering_words![
    (lt, |ord| ord == Ordering::Less),
    (le, |ord| ord != Ordering::Greater),
    (gt, |ord| ord == Ordering::Greater),
    (ge, |ord| ord != Ordering::Less),
];

fn binary_logical(
    interp: &mut Interpreter,
    bool_op: fn(bool, bool) -> bool,
    int_op: fn(i64, i64) -> i64,
) -> WordResult {
    let (x, y) = pop_pair(interp)?;
    let result = match (x, y) {
        (Value::Boolean(a), Value::Boolean(b)) => Value::Boolean(bool_op(a, b)),
        (Value::Integer(a), Value::Integer(b)) => Value::Integer(int_op(a, b)),
        _ => return Err(WordError::eval("boolean or integer operands expected")),
    };
    interp.stack_mut().push(result);
    Ok(())
}

fn and(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    binary_logical(interp, |a, b| a && b, |a, b| a & b)
}

fn or(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    binary_logical(interp, |a, b| a || b, |a, b| a | b)
}

fn xor(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    binary_logical(interp, |a, b| a != b, |a, b| a ^ b)
}

fn not(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let v = interp.stack_mut().pop()?;
    let result = match v {
        Value::Boolean(a) => Value::Boolean(!a),
        Value::Integer(a) => Value::Integer(!a),
        _ => return Err(WordError::eval("boolean or integer operand expected")),
    };
    interp.stack_mut().push(result);
    Ok(())
}

fn ifte(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let else_value = interp.stack_mut().pop()?;
    let then_value = interp.stack_mut().pop()?;
    let cond = interp.stack_mut().pop_boolean()?;
    interp
        .stack_mut()
        .push(if cond { then_value } else { else_value });
    Ok(())
}

pub(crate) fn register(dict: &mut Dictionary) {
    let any2 = || Validator::types(&[ParamType::Any, ParamType::Any]);

    let entries: &[(&str, &str, Validator, NativeBody)] = &[
        ("==", "Equality (a b -- a==b)", any2(), eq),
        ("!=", "Inequality (a b -- a!=b)", any2(), ne),
        ("<", "Less than (x y -- x<y)", ordered2(), lt),
        ("<=", "Less than or equal (x y -- x<=y)", ordered2(), le),
        (">", "Greater than (x y -- x>y)", ordered2(), gt),
        (">=", "Greater than or equal (x y -- x>=y)", ordered2(), ge),
        ("AND", "Logical or bitwise and (a b -- a&b)", logical2(), and),
        ("OR", "Logical or bitwise or (a b -- a|b)", logical2(), or),
        ("XOR", "Logical or bitwise exclusive-or (a b -- a^b)", logical2(), xor),
        (
            "NOT",
            "Logical or bitwise complement (a -- !a)",
            Validator::any_of(vec![
                Validator::types(&[ParamType::Boolean]),
                Validator::types(&[ParamType::Integer]),
            ]),
            not,
        ),
        (
            "IFTE",
            "Select by condition (cond then else -- then|else)",
            Validator::types(&[ParamType::Any, ParamType::Any, ParamType::Boolean]),
            ifte,
        ),
    ];
    for (name, description, validator, body) in entries {
        dict.insert(
            *name,
            WordDefinition::native(*description, validator.clone(), *body),
        );
    }
}
