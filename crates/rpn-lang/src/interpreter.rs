//! The evaluator core.
//!
//! One [`Interpreter`] owns the stack, both dictionaries, the colon-definition
//! assembly state, and the status string. `parse` consumes one line of
//! whitespace-delimited words; each word goes to the runtime or compile-time
//! evaluator depending on whether a definition is being collected.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rpn_core::tokenizer::next_word;
use rpn_core::{Stack, Value};

use crate::dictionary::{Dictionary, WordBody, WordDefinition};
use crate::outcome::{FileError, Outcome, WordError, WordResult};
use crate::validator::ValidatorFailure;
use crate::words;

/// Colon-definition assembly state.
///
/// `: … ;` drives `Interpreting -> AwaitingName -> Collecting -> Interpreting`.
/// A compile-time failure discards the pending definition and returns to
/// `Interpreting`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum CompileState {
    #[default]
    Interpreting,
    AwaitingName,
    Collecting {
        name: String,
        tokens: Vec<String>,
    },
}

/// The rpn interpreter.
pub struct Interpreter {
    pub(crate) stack: Stack,
    pub(crate) runtime: Dictionary,
    pub(crate) compiletime: Dictionary,
    pub(crate) compile: CompileState,
    pub(crate) loop_indices: Vec<i64>,
    status: String,
}

impl Interpreter {
    /// Construct with the built-in word set loaded, an empty stack, and empty
    /// compilation state.
    pub fn new() -> Self {
        let mut interp = Self {
            stack: Stack::new(),
            runtime: Dictionary::new(),
            compiletime: Dictionary::new(),
            compile: CompileState::default(),
            loop_indices: Vec::new(),
            status: String::new(),
        };
        words::register_builtins(&mut interp.runtime, &mut interp.compiletime);
        interp
    }

    /// Consume one line. Returns the worst-severity result seen on it; the
    /// line is abandoned early only on a parse error.
    pub fn parse(&mut self, line: &str) -> Outcome {
        self.status.clear();
        let mut worst = Outcome::Ok;
        let mut buffer = line.to_string();
        while !buffer.is_empty() {
            let (word, remaining, _) = next_word(&buffer, ' ');
            let word = word.to_string();
            let mut rest = remaining.to_string();
            if !word.is_empty() {
                if let Err(err) = self.eval(&word, &mut rest) {
                    let outcome = err.outcome();
                    self.status = err.to_string();
                    worst = worst.max(outcome);
                    if outcome == Outcome::ParseError {
                        return worst;
                    }
                }
            }
            buffer = rest;
        }
        worst
    }

    /// Consume a file line by line, stopping at the first line that does not
    /// come back `Ok` and propagating its result. Definitions may span lines.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<Outcome, FileError> {
        let path = path.as_ref();
        let io_err = |source| FileError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        for (line_no, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(io_err)?;
            let outcome = self.parse(&line);
            if outcome != Outcome::Ok {
                log::error!(
                    "parse error at {}:{}: {}",
                    path.display(),
                    line_no + 1,
                    self.status
                );
                return Ok(outcome);
            }
        }
        Ok(Outcome::Ok)
    }

    /// Most recent failure message; empty on success. Reset at each `parse`
    /// call boundary.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The value stack.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Mutable access to the value stack.
    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    /// Register a host word in the runtime dictionary, replacing any existing
    /// entry of the same name.
    pub fn add_definition(&mut self, name: impl Into<String>, def: WordDefinition) {
        self.runtime.insert(name, def);
    }

    /// Is `name` present in the runtime dictionary?
    pub fn word_exists(&self, name: &str) -> bool {
        self.runtime.contains(name)
    }

    /// All runtime word names, sorted.
    pub fn words(&self) -> Vec<&str> {
        self.runtime.names()
    }

    /// Is a colon definition being collected?
    pub fn is_compiling(&self) -> bool {
        self.compile != CompileState::Interpreting
    }

    fn eval(&mut self, word: &str, rest: &mut String) -> WordResult {
        if self.is_compiling() {
            self.compiletime_eval(word, rest)
        } else {
            self.runtime_eval(word, rest)
        }
    }

    /// Runtime path: numeric literals push, everything else is looked up in
    /// the runtime dictionary, validated, and invoked.
    pub(crate) fn runtime_eval(&mut self, word: &str, rest: &mut String) -> WordResult {
        if starts_numeric(word) {
            let value = parse_literal(word)?;
            self.stack.push(value);
            return Ok(());
        }
        let def = self
            .runtime
            .get(word)
            .cloned()
            .ok_or_else(|| WordError::Unknown(word.to_string()))?;
        match def.validator.check(&self.stack) {
            Err(ValidatorFailure::Underflow) => {
                return Err(WordError::Underflow(word.to_string()))
            }
            Err(ValidatorFailure::TypeMismatch) => {
                return Err(WordError::TypeError(word.to_string()))
            }
            Ok(()) => {}
        }
        self.invoke(&def, rest)
    }

    /// Compile-time path: the first word after `:` names the definition;
    /// after that, `;` and `(` execute, literals and known runtime words are
    /// collected, anything else aborts the definition.
    fn compiletime_eval(&mut self, word: &str, rest: &mut String) -> WordResult {
        if self.compile == CompileState::AwaitingName {
            self.compile = CompileState::Collecting {
                name: word.to_string(),
                tokens: Vec::new(),
            };
            return Ok(());
        }
        if let Some(def) = self.compiletime.get(word).cloned() {
            return self.invoke(&def, rest);
        }
        if starts_numeric(word) {
            if let Err(err) = parse_literal(word) {
                self.compile = CompileState::Interpreting;
                return Err(err);
            }
        } else if !self.runtime.contains(word) {
            self.compile = CompileState::Interpreting;
            return Err(WordError::parse(format!(
                "unrecognized word at compile time: '{}'",
                word
            )));
        }
        if let CompileState::Collecting { tokens, .. } = &mut self.compile {
            tokens.push(word.to_string());
        }
        Ok(())
    }

    fn invoke(&mut self, def: &WordDefinition, rest: &mut String) -> WordResult {
        match &def.body {
            WordBody::Native(body) => body(self, rest),
            WordBody::Hosted { handler, context } => handler(self, context.as_ref(), rest),
            WordBody::Constant(value) => {
                self.stack.push(value.clone());
                Ok(())
            }
            WordBody::User(tokens) => self.run_tokens(tokens),
        }
    }

    /// Re-interpret a captured token sequence against the current runtime
    /// dictionary (late binding). The tokens share one cursor, so words that
    /// consume trailing text keep working inside definitions.
    pub(crate) fn run_tokens(&mut self, tokens: &[String]) -> WordResult {
        let mut buffer = tokens.join(" ");
        while !buffer.is_empty() {
            let (word, remaining, _) = next_word(&buffer, ' ');
            let word = word.to_string();
            let mut rest = remaining.to_string();
            if !word.is_empty() {
                self.runtime_eval(&word, &mut rest)?;
            }
            buffer = rest;
        }
        Ok(())
    }

    /// Innermost active FOR index.
    pub(crate) fn current_loop_index(&self) -> Option<i64> {
        self.loop_indices.last().copied()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Words whose first byte is an ASCII digit are numeric literals.
pub(crate) fn starts_numeric(word: &str) -> bool {
    word.as_bytes().first().is_some_and(|b| b.is_ascii_digit())
}

/// Parse a numeric literal: `.` means a decimal double, otherwise C-style
/// base detection (`0x` hex, leading `0` octal, else decimal).
pub(crate) fn parse_literal(word: &str) -> Result<Value, WordError> {
    let malformed = || WordError::parse(format!("malformed numeric literal '{}'", word));
    if word.contains('.') {
        return word
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| malformed());
    }
    if let Some(hex) = word.strip_prefix("0x").or_else(|| word.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16)
            .map(Value::Integer)
            .map_err(|_| malformed());
    }
    if word.len() > 1 && word.starts_with('0') {
        return i64::from_str_radix(&word[1..], 8)
            .map(Value::Integer)
            .map_err(|_| malformed());
    }
    word.parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| malformed())
}
