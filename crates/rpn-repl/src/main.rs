//! Interactive host for the rpn language.
//!
//! Reads lines with rustyline, feeds them to the interpreter, and prints the
//! status after each failing line. Paths given on the command line are parsed
//! first with `parse_file`. The `BYE` and `WORDS` words are registered here
//! through the host surface, with a [`WordContext`] owned by this binary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rpn_lang::{HostedBody, Interpreter, Outcome, Validator, WordContext, WordDefinition};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// State shared with the hosted words.
struct ReplContext {
    running: AtomicBool,
}

fn register_host_words(interp: &mut Interpreter, ctx: &Arc<ReplContext>) {
    let context: Arc<dyn WordContext> = ctx.clone();

    let bye: HostedBody = Arc::new(
        |_interp: &mut Interpreter, ctx: &dyn WordContext, _rest: &mut String| {
            if let Some(repl) = ctx.as_any().downcast_ref::<ReplContext>() {
                repl.running.store(false, Ordering::SeqCst);
            }
            Ok(())
        },
    );
    interp.add_definition(
        "BYE",
        WordDefinition::hosted(
            "Leave the calculator",
            Validator::none(),
            bye,
            context.clone(),
        ),
    );

    let words: HostedBody = Arc::new(
        |interp: &mut Interpreter, _ctx: &dyn WordContext, _rest: &mut String| {
            println!("{}", interp.words().join(" "));
            Ok(())
        },
    );
    interp.add_definition(
        "WORDS",
        WordDefinition::hosted(
            "List the runtime dictionary",
            Validator::none(),
            words,
            context,
        ),
    );
}

fn main() {
    env_logger::init();

    let mut interp = Interpreter::new();
    let ctx = Arc::new(ReplContext {
        running: AtomicBool::new(true),
    });
    register_host_words(&mut interp, &ctx);

    for path in std::env::args().skip(1) {
        match interp.parse_file(&path) {
            Ok(Outcome::Ok) => {}
            Ok(_) => {
                eprintln!("{}: {}", path, interp.status());
                std::process::exit(1);
            }
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
    }

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    while ctx.running.load(Ordering::SeqCst) {
        match editor.readline("rpn> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                let outcome = interp.parse(&line);
                if outcome != Outcome::Ok {
                    println!("?{}", interp.status());
                }
            }
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{:?}", err);
                break;
            }
        }
    }
}
