//! The rpn language: dictionary, validators, interpreter, and the built-in
//! word set.
//!
//! A line of text flows into the tokenizer; each extracted word is dispatched
//! to the runtime or compile-time evaluator. The runtime path pushes numeric
//! literals and invokes dictionary entries after their validator approves;
//! the compile-time path collects tokens into a pending colon definition.
//!
//! # Example
//!
//! ```
//! use rpn_lang::{Interpreter, Outcome};
//!
//! let mut interp = Interpreter::new();
//! assert_eq!(interp.parse("3 4 + 2 *"), Outcome::Ok);
//! assert_eq!(interp.stack().peek_integer(1), Ok(14));
//! ```
//!
//! Hosts extend the dictionary through [`Interpreter::add_definition`] with a
//! [`WordContext`] handle of their own; the interpreter never owns the
//! subsystem behind it.

mod dictionary;
mod interpreter;
mod outcome;
mod validator;
mod words;

pub use dictionary::{
    Dictionary, HostedBody, NativeBody, WordBody, WordContext, WordDefinition,
};
pub use interpreter::Interpreter;
pub use outcome::{FileError, Outcome, WordError, WordResult};
pub use validator::{ParamType, Signature, Validator, ValidatorFailure};

// Re-export the core data model so hosts depend on one crate.
pub use rpn_core::{Stack, StackError, TypeTag, Value, Vec3};
