//! Result codes and error values.
//!
//! Errors are values, never unwinds: each word body returns a [`WordResult`],
//! the interpreter aggregates them into a per-line [`Outcome`] and keeps a
//! human-readable status string for the host.

use std::path::PathBuf;

use rpn_core::StackError;
use thiserror::Error;

/// Per-line result code.
///
/// The derived ordering is the severity order used when aggregating the
/// results of a line: `Ok < DictError < ParamError < EvalError < ParseError`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    /// No error.
    #[default]
    Ok,
    /// Unknown identifier.
    DictError,
    /// Validator rejected the stack shape or types.
    ParamError,
    /// A word body reported failure.
    EvalError,
    /// Malformed literal, unterminated trailing text, or an unknown word at
    /// compile time.
    ParseError,
}

/// Failure raised while evaluating a single word.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WordError {
    /// The word is in neither dictionary.
    #[error("not found '{0}' in dict")]
    Unknown(String),
    /// The stack is too shallow for the word's signature.
    #[error("{0}: stack underflow")]
    Underflow(String),
    /// The stack holds the wrong types for the word's signature.
    #[error("{0}: type error")]
    TypeError(String),
    /// The word body failed.
    #[error("{0}")]
    Eval(String),
    /// The input text itself is broken.
    #[error("{0}")]
    Parse(String),
}

impl WordError {
    /// The outcome this failure maps to.
    pub fn outcome(&self) -> Outcome {
        match self {
            WordError::Unknown(_) => Outcome::DictError,
            WordError::Underflow(_) | WordError::TypeError(_) => Outcome::ParamError,
            WordError::Eval(_) => Outcome::EvalError,
            WordError::Parse(_) => Outcome::ParseError,
        }
    }

    pub fn eval(msg: impl Into<String>) -> Self {
        WordError::Eval(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        WordError::Parse(msg.into())
    }
}

impl From<StackError> for WordError {
    fn from(e: StackError) -> Self {
        WordError::Eval(e.to_string())
    }
}

/// Result returned by word bodies.
pub type WordResult = Result<(), WordError>;

/// Host-level failures from [`crate::Interpreter::parse_file`].
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
