//! Type conversion and aggregate construction words.

use std::collections::BTreeMap;

use rpn_core::Value;

use crate::dictionary::{Dictionary, NativeBody, WordDefinition};
use crate::interpreter::Interpreter;
use crate::outcome::{WordError, WordResult};
use crate::validator::{ParamType, Validator};

fn to_int(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let v = interp.stack_mut().pop_integer()?;
    interp.stack_mut().push(Value::integer(v));
    Ok(())
}

fn to_float(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let v = interp.stack_mut().pop_double()?;
    interp.stack_mut().push(Value::double(v));
    Ok(())
}

fn to_string(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let v = interp.stack_mut().pop()?;
    interp.stack_mut().push(Value::string(v.to_string()));
    Ok(())
}

/// Parse the canonical rendering back: integer, then double, then boolean.
/// The string is pushed back untouched when nothing matches.
fn from_string(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let s = interp.stack_mut().pop_string()?;
    let text = s.trim();
    let value = if let Ok(i) = text.parse::<i64>() {
        Value::Integer(i)
    } else if let Ok(d) = text.parse::<f64>() {
        Value::Double(d)
    } else if text == "true" || text == "false" {
        Value::Boolean(text == "true")
    } else {
        let message = format!("STR->: cannot parse '{}'", text);
        interp.stack_mut().push(Value::String(s));
        return Err(WordError::eval(message));
    };
    interp.stack_mut().push(value);
    Ok(())
}

fn to_vec3(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let z = interp.stack_mut().pop_double()?;
    let y = interp.stack_mut().pop_double()?;
    let x = interp.stack_mut().pop_double()?;
    interp.stack_mut().push(Value::vec3(x, y, z));
    Ok(())
}

fn to_vec3_x(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let x = interp.stack_mut().pop_double()?;
    interp.stack_mut().push(Value::vec3(x, f64::NAN, f64::NAN));
    Ok(())
}

fn to_vec3_y(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let y = interp.stack_mut().pop_double()?;
    interp.stack_mut().push(Value::vec3(f64::NAN, y, f64::NAN));
    Ok(())
}

fn to_vec3_z(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let z = interp.stack_mut().pop_double()?;
    interp.stack_mut().push(Value::vec3(f64::NAN, f64::NAN, z));
    Ok(())
}

fn from_vec3(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let v = interp.stack_mut().pop_vec3()?;
    interp.stack_mut().push(Value::double(v.x));
    interp.stack_mut().push(Value::double(v.y));
    interp.stack_mut().push(Value::double(v.z));
    Ok(())
}

fn to_array(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let count = interp.stack().peek_integer(1)?;
    let n = usize::try_from(count).map_err(|_| WordError::Underflow("->ARRAY".to_string()))?;
    if n > interp.stack().depth() - 1 {
        return Err(WordError::Underflow("->ARRAY".to_string()));
    }
    interp.stack_mut().pop()?;
    let mut elements = Vec::with_capacity(n);
    for _ in 0..n {
        elements.push(interp.stack_mut().pop()?);
    }
    elements.reverse();
    interp.stack_mut().push(Value::Array(elements));
    Ok(())
}

fn from_array(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let elements = match interp.stack_mut().pop()? {
        Value::Array(elements) => elements,
        other => {
            interp.stack_mut().push(other);
            return Err(WordError::TypeError("ARRAY->".to_string()));
        }
    };
    let count = elements.len() as i64;
    for e in elements {
        interp.stack_mut().push(e);
    }
    interp.stack_mut().push(Value::integer(count));
    Ok(())
}

fn to_object(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let count = interp.stack().peek_integer(1)?;
    let n = usize::try_from(count).map_err(|_| WordError::Underflow("->OBJECT".to_string()))?;
    if 2 * n > interp.stack().depth() - 1 {
        return Err(WordError::Underflow("->OBJECT".to_string()));
    }
    interp.stack_mut().pop()?;
    let mut entries = BTreeMap::new();
    for _ in 0..n {
        let value = interp.stack_mut().pop()?;
        let key = interp
            .stack_mut()
            .pop_string()
            .map_err(|_| WordError::TypeError("->OBJECT".to_string()))?;
        entries.insert(key, value);
    }
    interp.stack_mut().push(Value::Object(entries));
    Ok(())
}

fn from_object(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let entries = match interp.stack_mut().pop()? {
        Value::Object(entries) => entries,
        other => {
            interp.stack_mut().push(other);
            return Err(WordError::TypeError("OBJECT->".to_string()));
        }
    };
    let count = entries.len() as i64;
    for (key, value) in entries {
        interp.stack_mut().push(Value::String(key));
        interp.stack_mut().push(value);
    }
    interp.stack_mut().push(Value::integer(count));
    Ok(())
}

/// Concatenate two values as text; at least one is already a String.
fn concat(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let y = interp.stack_mut().pop()?;
    let x = interp.stack_mut().pop()?;
    interp
        .stack_mut()
        .push(Value::string(format!("{}{}", x, y)));
    Ok(())
}

pub(crate) fn register(dict: &mut Dictionary) {
    let number1 = || Validator::types(&[ParamType::Number]);

    let entries: &[(&str, &str, Validator, NativeBody)] = &[
        ("->INT", "Convert to integer (x -- int(x))", number1(), to_int),
        ("->FLOAT", "Convert to double (x -- float(x))", number1(), to_float),
        (
            "->STRING",
            "Convert top of stack to a string (val -- str)",
            Validator::types(&[ParamType::Any]),
            to_string,
        ),
        (
            "STR->",
            "Parse string at top of stack to another type (str -- val)",
            Validator::types(&[ParamType::String]),
            from_string,
        ),
        (
            "->VEC3",
            "Build a vector from components (x y z -- v)",
            Validator::types(&[ParamType::Number, ParamType::Number, ParamType::Number]),
            to_vec3,
        ),
        ("->VEC3x", "Vector with only an X component (x -- {x,,})", number1(), to_vec3_x),
        ("->VEC3y", "Vector with only a Y component (y -- {,y,})", number1(), to_vec3_y),
        ("->VEC3z", "Vector with only a Z component (z -- {,,z})", number1(), to_vec3_z),
        (
            "VEC3->",
            "Split a vector into components (v -- x y z)",
            Validator::types(&[ParamType::Vec3]),
            from_vec3,
        ),
        (
            "->ARRAY",
            "Collect the top n items into an array (... n -- arr)",
            Validator::types(&[ParamType::Integer]),
            to_array,
        ),
        (
            "ARRAY->",
            "Spread an array onto the stack (arr -- ... n)",
            Validator::types(&[ParamType::Array]),
            from_array,
        ),
        (
            "->OBJECT",
            "Collect n key/value pairs into an object (... n -- obj)",
            Validator::types(&[ParamType::Integer]),
            to_object,
        ),
        (
            "OBJECT->",
            "Spread an object onto the stack (obj -- ... n)",
            Validator::types(&[ParamType::Object]),
            from_object,
        ),
        (
            "CONCAT",
            "String concatenation (a b -- str(a)+str(b))",
            Validator::any_of(vec![
                Validator::types(&[ParamType::Any, ParamType::String]),
                Validator::types(&[ParamType::String, ParamType::Any]),
            ]),
            concat,
        ),
    ];
    for (name, description, validator, body) in entries {
        dict.insert(
            *name,
            WordDefinition::native(*description, validator.clone(), *body),
        );
    }
}
