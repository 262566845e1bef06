//! Arithmetic, transcendental, and random-number words.
//!
//! All trigonometric functions use radians. Binary operators follow the
//! conventional operand order: with y on top, `x y -` leaves x-y.

use rand::Rng;
use rpn_core::{Value, Vec3};

use crate::dictionary::{Dictionary, WordDefinition};
use crate::interpreter::Interpreter;
use crate::outcome::{WordError, WordResult};
use crate::validator::{ParamType, Validator};

fn number1() -> Validator {
    Validator::types(&[ParamType::Number])
}

fn number2() -> Validator {
    Validator::types(&[ParamType::Number, ParamType::Number])
}

fn number2_or_vec2() -> Validator {
    Validator::any_of(vec![
        number2(),
        Validator::types(&[ParamType::Vec3, ParamType::Vec3]),
    ])
}

/// Pop two operands and combine, preserving Integer when both operands are
/// Integer. `int_op` returning `None` signals division by zero.
fn binary_numeric(
    interp: &mut Interpreter,
    int_op: fn(i64, i64) -> Option<i64>,
    dbl_op: fn(f64, f64) -> f64,
) -> WordResult {
    let y = interp.stack_mut().pop()?;
    let x = interp.stack_mut().pop()?;
    let result = match (&x, &y) {
        (Value::Integer(a), Value::Integer(b)) => Value::Integer(
            int_op(*a, *b).ok_or_else(|| WordError::eval("division by zero"))?,
        ),
        _ => {
            let a = x
                .as_double()
                .ok_or_else(|| WordError::eval("number expected"))?;
            let b = y
                .as_double()
                .ok_or_else(|| WordError::eval("number expected"))?;
            Value::Double(dbl_op(a, b))
        }
    };
    interp.stack_mut().push(result);
    Ok(())
}

/// Pop one operand, preserving Integer.
fn unary_numeric(
    interp: &mut Interpreter,
    int_op: fn(i64) -> i64,
    dbl_op: fn(f64) -> f64,
) -> WordResult {
    let v = interp.stack_mut().pop()?;
    let result = match v {
        Value::Integer(a) => Value::Integer(int_op(a)),
        other => Value::Double(dbl_op(
            other
                .as_double()
                .ok_or_else(|| WordError::eval("number expected"))?,
        )),
    };
    interp.stack_mut().push(result);
    Ok(())
}

fn vec3_binary(interp: &mut Interpreter, op: fn(Vec3, Vec3) -> Vec3) -> WordResult {
    let b = interp.stack_mut().pop_vec3()?;
    let a = interp.stack_mut().pop_vec3()?;
    interp.stack_mut().push(Value::Vec3(op(a, b)));
    Ok(())
}

fn add(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    if interp.stack().peek_vec3(1).is_ok() {
        return vec3_binary(interp, |a, b| Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z));
    }
    binary_numeric(interp, |a, b| Some(a.wrapping_add(b)), |a, b| a + b)
}

fn sub(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    if interp.stack().peek_vec3(1).is_ok() {
        return vec3_binary(interp, |a, b| Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z));
    }
    binary_numeric(interp, |a, b| Some(a.wrapping_sub(b)), |a, b| a - b)
}

fn mul(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    binary_numeric(interp, |a, b| Some(a.wrapping_mul(b)), |a, b| a * b)
}

fn div(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    binary_numeric(interp, i64::checked_div, |a, b| a / b)
}

fn neg(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    if interp.stack().peek_vec3(1).is_ok() {
        let v = interp.stack_mut().pop_vec3()?;
        interp
            .stack_mut()
            .push(Value::vec3(-v.x, -v.y, -v.z));
        return Ok(());
    }
    // On Integer this is the bitwise complement; arithmetic negation of an
    // integer n is `0 n -`.
    unary_numeric(interp, |a| !a, |a| -a)
}

fn abs(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    if interp.stack().peek_vec3(1).is_ok() {
        let v = interp.stack_mut().pop_vec3()?;
        interp.stack_mut().push(Value::double(v.magnitude()));
        return Ok(());
    }
    unary_numeric(interp, i64::wrapping_abs, f64::abs)
}

fn sq(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    unary_numeric(interp, |a| a.wrapping_mul(a), |a| a * a)
}

fn min(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    binary_numeric(interp, |a, b| Some(a.min(b)), f64::min)
}

fn max(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    binary_numeric(interp, |a, b| Some(a.max(b)), f64::max)
}

fn pow(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let y = interp.stack_mut().pop_double()?;
    let x = interp.stack_mut().pop_double()?;
    interp.stack_mut().push(Value::double(x.powf(y)));
    Ok(())
}

fn hypot(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let y = interp.stack_mut().pop_double()?;
    let x = interp.stack_mut().pop_double()?;
    interp.stack_mut().push(Value::double(x.hypot(y)));
    Ok(())
}

fn atan2(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let x = interp.stack_mut().pop_double()?;
    let y = interp.stack_mut().pop_double()?;
    interp.stack_mut().push(Value::double(y.atan2(x)));
    Ok(())
}

fn rand(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let v: f64 = rand::thread_rng().gen();
    interp.stack_mut().push(Value::double(v));
    Ok(())
}

macro_rules! unary_double_words {
    ($(($name:ident, $op:expr)),* $(,)?) => {
        $(
            fn $name(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
                let x = interp.stack_mut().pop_double()?;
                interp.stack_mut().push(Value::double($op(x)));
                Ok(())
            }
        )*
    };
}

unary_double_words![
    (inv, |x: f64| 1.0 / x),
    (sqrt, f64::sqrt),
    (sin, f64::sin),
    (cos, f64::cos),
    (tan, f64::tan),
    (asin, f64::asin),
    (acos, f64::acos),
    (atan, f64::atan),
    (exp, f64::exp),
    (ln, f64::ln),
    (ln2, f64::log2),
    (log, f64::log10),
    (floor, f64::floor),
    (ceil, f64::ceil),
    (round, f64::round),
];

pub(crate) fn register(dict: &mut Dictionary) {
    let entries: &[(&str, &str, fn() -> Validator, crate::dictionary::NativeBody)] = &[
        ("+", "Addition (x y -- x+y)", number2_or_vec2, add),
        ("-", "Subtraction (x y -- x-y)", number2_or_vec2, sub),
        ("*", "Multiplication (x y -- x*y)", number2, mul),
        ("/", "Division (x y -- x/y)", number2, div),
        ("NEG", "Negate; bitwise complement on integers (x -- -x)", || {
            Validator::any_of(vec![number1(), Validator::types(&[ParamType::Vec3])])
        }, neg),
        ("INV", "Invert (x -- 1/x)", number1, inv),
        ("ABS", "Absolute Value (x -- |x|)", || {
            Validator::any_of(vec![number1(), Validator::types(&[ParamType::Vec3])])
        }, abs),
        ("SQ", "Square (x -- x^2)", number1, sq),
        ("SQRT", "Square Root (x -- sqrt(x))", number1, sqrt),
        ("POW", "Exponentiation (x y -- x^y)", number2, pow),
        ("HYPOT", "Hypotenuse (x y -- sqrt(x^2+y^2))", number2, hypot),
        ("SIN", "Sine (angle -- sin(angle))", number1, sin),
        ("COS", "Cosine (angle -- cos(angle))", number1, cos),
        ("TAN", "Tangent (angle -- tan(angle))", number1, tan),
        ("ASIN", "Arc Sine (x -- asin(x))", number1, asin),
        ("ACOS", "Arc-Cosine (x -- acos(x))", number1, acos),
        ("ATAN", "Arc-Tangent (x -- atan(x))", number1, atan),
        ("ATAN2", "Arc-Tangent of two variables (y x -- atan2(y,x))", number2, atan2),
        ("EXP", "Natural exponential (x -- e^x)", number1, exp),
        ("LN", "Natural logarithm (x -- ln(x))", number1, ln),
        ("LN2", "Base-2 logarithm (x -- log2(x))", number1, ln2),
        ("LOG", "Base-10 logarithm (x -- log10(x))", number1, log),
        ("FLOOR", "Round down (x -- floor(x))", number1, floor),
        ("CEIL", "Round up (x -- ceil(x))", number1, ceil),
        ("ROUND", "Round to nearest (x -- round(x))", number1, round),
        ("MIN", "Minimum (x y -- min(x,y))", number2, min),
        ("MAX", "Maximum (x y -- max(x,y))", number2, max),
        ("RAND", "Uniform random number ( -- r)", Validator::none, rand),
        ("RAND48", "Uniform random number ( -- r)", Validator::none, rand),
    ];
    for (name, description, validator, body) in entries {
        dict.insert(*name, WordDefinition::native(*description, validator(), *body));
    }

    dict.insert(
        "k_PI",
        WordDefinition::constant("The constant pi", Value::double(std::f64::consts::PI)),
    );
    dict.insert(
        "k_E",
        WordDefinition::constant("The constant e", Value::double(std::f64::consts::E)),
    );
}
