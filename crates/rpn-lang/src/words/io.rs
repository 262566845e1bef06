//! Display, string-literal, and comment words.

use rpn_core::tokenizer::next_word;
use rpn_core::Value;

use crate::dictionary::{Dictionary, WordDefinition};
use crate::interpreter::Interpreter;
use crate::outcome::{WordError, WordResult};
use crate::validator::Validator;

fn print_stack(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    println!("{}", interp.stack().render());
    Ok(())
}

/// `." …"` captures everything up to the next `"`, spaces included.
fn string_literal(interp: &mut Interpreter, rest: &mut String) -> WordResult {
    let (literal, remaining, pos) = next_word(rest.as_str(), '"');
    if pos.is_none() {
        return Err(WordError::parse(format!(
            "parse error in string literal: terminating '\"' not found [{}]",
            rest
        )));
    }
    let value = Value::string(literal);
    let remaining = remaining.to_string();
    *rest = remaining;
    interp.stack_mut().push(value);
    Ok(())
}

/// `( …)` discards everything up to the next `)`. Comments do not nest.
pub(crate) fn comment(_interp: &mut Interpreter, rest: &mut String) -> WordResult {
    let (_, remaining, pos) = next_word(rest.as_str(), ')');
    if pos.is_none() {
        return Err(WordError::parse(format!(
            "parse error in comment: terminating ')' not found [{}]",
            rest
        )));
    }
    let remaining = remaining.to_string();
    *rest = remaining;
    Ok(())
}

pub(crate) fn register(dict: &mut Dictionary) {
    dict.insert(
        ".S",
        WordDefinition::native("Print the stack", Validator::none(), print_stack),
    );
    dict.insert(
        ".\"",
        WordDefinition::native("String literal", Validator::none(), string_literal),
    );
    dict.insert(
        "(",
        WordDefinition::native("Comment", Validator::none(), comment),
    );
}
