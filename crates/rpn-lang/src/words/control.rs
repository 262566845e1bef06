//! Loop words.
//!
//! `FOR … NEXT` consumes `start limit` from the stack, captures the words up
//! to the matching `NEXT` from the remaining input, and re-interprets them
//! once per index. The word `i` pushes the innermost active index.

use rpn_core::tokenizer::next_word;
use rpn_core::Value;

use crate::dictionary::{Dictionary, WordDefinition};
use crate::interpreter::Interpreter;
use crate::outcome::{WordError, WordResult};
use crate::validator::{ParamType, Validator};

/// Capture the loop body from `rest`, honoring nested FOR/NEXT pairs.
fn capture_body(rest: &mut String) -> Result<Vec<String>, WordError> {
    let original = rest.clone();
    let mut tokens = Vec::new();
    let mut nesting = 0usize;
    loop {
        if rest.is_empty() {
            return Err(WordError::parse(format!(
                "parse error in FOR: terminating 'NEXT' not found [{}]",
                original
            )));
        }
        let (word, remaining, _) = next_word(rest.as_str(), ' ');
        let word = word.to_string();
        let remaining = remaining.to_string();
        *rest = remaining;
        if word.is_empty() {
            continue;
        }
        if word == "NEXT" {
            if nesting == 0 {
                return Ok(tokens);
            }
            nesting -= 1;
        } else if word == "FOR" {
            nesting += 1;
        }
        tokens.push(word);
    }
}

fn for_loop(interp: &mut Interpreter, rest: &mut String) -> WordResult {
    let limit = interp.stack_mut().pop_integer()?;
    let start = interp.stack_mut().pop_integer()?;
    let tokens = capture_body(rest)?;
    for index in start..=limit {
        interp.loop_indices.push(index);
        let result = interp.run_tokens(&tokens);
        interp.loop_indices.pop();
        result?;
    }
    Ok(())
}

fn next(_interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    Err(WordError::eval("NEXT without FOR"))
}

fn loop_index(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let index = interp
        .current_loop_index()
        .ok_or_else(|| WordError::eval("'i' used outside FOR ... NEXT"))?;
    interp.stack_mut().push(Value::integer(index));
    Ok(())
}

pub(crate) fn register(dict: &mut Dictionary) {
    dict.insert(
        "FOR",
        WordDefinition::native(
            "Loop over an index range (start limit -- )",
            Validator::types(&[ParamType::Integer, ParamType::Integer]),
            for_loop,
        ),
    );
    dict.insert(
        "NEXT",
        WordDefinition::native("End of a FOR loop body", Validator::none(), next),
    );
    dict.insert(
        "i",
        WordDefinition::native(
            "Push the innermost loop index ( -- i)",
            Validator::none(),
            loop_index,
        ),
    );
}
