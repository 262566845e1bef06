//! Colon definitions and variable storage.
//!
//! `:` switches the interpreter into compile mode; `;` (which lives in the
//! compile-time dictionary, next to `(`) installs the collected tokens as a
//! user word in the runtime dictionary.

use crate::dictionary::{Dictionary, WordDefinition};
use crate::interpreter::{CompileState, Interpreter};
use crate::outcome::{WordError, WordResult};
use crate::validator::{ParamType, Validator};

use super::io;

fn begin_definition(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    interp.compile = CompileState::AwaitingName;
    Ok(())
}

fn end_definition(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    match std::mem::take(&mut interp.compile) {
        CompileState::Collecting { name, tokens } => {
            let def = WordDefinition::user(&name, tokens);
            interp.runtime.insert(name, def);
            Ok(())
        }
        _ => Err(WordError::eval("';' outside a definition")),
    }
}

/// `val name STO` installs a word that pushes `val`.
fn store(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let name = interp.stack_mut().pop_string()?;
    let value = interp.stack_mut().pop()?;
    let def = WordDefinition::constant(format!("variable {}", name), value);
    interp.runtime.insert(name, def);
    Ok(())
}

pub(crate) fn register(runtime: &mut Dictionary, compiletime: &mut Dictionary) {
    runtime.insert(
        ":",
        WordDefinition::native("Define new word", Validator::none(), begin_definition),
    );
    runtime.insert(
        "STO",
        WordDefinition::native(
            "Store a value under a name (val name -- )",
            Validator::types(&[ParamType::String, ParamType::Any]),
            store,
        ),
    );

    compiletime.insert(
        ";",
        WordDefinition::native("End Definition", Validator::none(), end_definition),
    );
    compiletime.insert(
        "(",
        WordDefinition::native("Comment", Validator::none(), io::comment),
    );
}
