//! Structural stack manipulation words.
//!
//! Count-taking words (`DROPN`, `PICK`, …) validate the Integer count on top,
//! then check it against the remaining depth before popping it; an
//! out-of-range count leaves the whole stack untouched, count included.

use rpn_core::{Stack, StackError, Value};

use crate::dictionary::{Dictionary, NativeBody, WordDefinition};
use crate::interpreter::Interpreter;
use crate::outcome::{WordError, WordResult};
use crate::validator::{ParamType, Validator};

fn counted(
    interp: &mut Interpreter,
    word: &str,
    op: fn(&mut Stack, usize) -> Result<(), StackError>,
) -> WordResult {
    let count = interp.stack().peek_integer(1)?;
    let n = usize::try_from(count).map_err(|_| WordError::Underflow(word.to_string()))?;
    if n > interp.stack().depth() - 1 {
        return Err(WordError::Underflow(word.to_string()));
    }
    interp.stack_mut().pop()?;
    op(interp.stack_mut(), n).map_err(|_| WordError::Underflow(word.to_string()))
}

fn clear(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    interp.stack_mut().clear();
    Ok(())
}

fn dup(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    interp.stack_mut().dup()?;
    Ok(())
}

fn drop(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    interp.stack_mut().pop()?;
    Ok(())
}

fn swap(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    interp.stack_mut().swap()?;
    Ok(())
}

fn over(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    interp.stack_mut().over()?;
    Ok(())
}

fn depth(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let d = interp.stack().depth() as i64;
    interp.stack_mut().push(Value::integer(d));
    Ok(())
}

fn reverse(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    interp.stack_mut().reverse();
    Ok(())
}

fn roll_up(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let d = interp.stack().depth();
    interp.stack_mut().roll_up(d)?;
    Ok(())
}

fn roll_down(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    let d = interp.stack().depth();
    interp.stack_mut().roll_down(d)?;
    Ok(())
}

fn rot_up(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    interp.stack_mut().roll_up(3)?;
    Ok(())
}

fn rot_down(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    interp.stack_mut().roll_down(3)?;
    Ok(())
}

fn drop_n(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    counted(interp, "DROPN", Stack::drop_n)
}

fn dup_n(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    counted(interp, "DUPN", Stack::dup_n)
}

fn nip_n(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    counted(interp, "NIPN", Stack::nip)
}

fn pick(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    counted(interp, "PICK", Stack::pick)
}

fn tuck_n(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    counted(interp, "TUCKN", Stack::tuck)
}

fn reverse_n(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    counted(interp, "REVERSEN", Stack::reverse_n)
}

fn roll_up_n(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    counted(interp, "ROLLUN", Stack::roll_up)
}

fn roll_down_n(interp: &mut Interpreter, _rest: &mut String) -> WordResult {
    counted(interp, "ROLLDN", Stack::roll_down)
}

pub(crate) fn register(dict: &mut Dictionary) {
    let any1 = || Validator::types(&[ParamType::Any]);
    let any2 = || Validator::types(&[ParamType::Any, ParamType::Any]);
    let int1 = || Validator::types(&[ParamType::Integer]);

    let entries: &[(&str, &str, Validator, NativeBody)] = &[
        ("CLEAR", "Clear the stack ( ... -- )", Validator::none(), clear),
        ("DUP", "Duplicate top of stack (a -- a a)", any1(), dup),
        ("DROP", "Drop top of stack (a -- )", any1(), drop),
        ("SWAP", "Exchange top two items (a b -- b a)", any2(), swap),
        ("OVER", "Copy second stack item to top (a b -- a b a)", any2(), over),
        ("DEPTH", "Push the stack depth ( -- n)", Validator::none(), depth),
        ("REVERSE", "Reverse the whole stack", Validator::none(), reverse),
        (
            "ROLLU",
            "Roll the stack up; the bottom comes to the top",
            Validator::StackSize(2),
            roll_up,
        ),
        (
            "ROLLD",
            "Roll the stack down; the top sinks to the bottom",
            Validator::StackSize(2),
            roll_down,
        ),
        ("ROTU", "Roll the top three items up", Validator::StackSize(3), rot_up),
        ("ROTD", "Roll the top three items down", Validator::StackSize(3), rot_down),
        ("DROPN", "Drop the top n items (... n -- )", int1(), drop_n),
        ("DUPN", "Duplicate the top n items as a block (... n -- ... ...)", int1(), dup_n),
        ("NIPN", "Remove the nth item (... n -- ...)", int1(), nip_n),
        ("PICK", "Copy the nth item to the top (... n -- ... a)", int1(), pick),
        ("TUCKN", "Insert a copy of the top at position n (... n -- ...)", int1(), tuck_n),
        ("REVERSEN", "Reverse the top n items (... n -- ...)", int1(), reverse_n),
        ("ROLLUN", "Roll the top n items up (... n -- ...)", int1(), roll_up_n),
        ("ROLLDN", "Roll the top n items down (... n -- ...)", int1(), roll_down_n),
    ];
    for (name, description, validator, body) in entries {
        dict.insert(
            *name,
            WordDefinition::native(*description, validator.clone(), *body),
        );
    }
}
