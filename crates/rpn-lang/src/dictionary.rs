//! Words and definitions.
//!
//! A [`Dictionary`] maps names to [`WordDefinition`]s. The interpreter owns
//! two of them: the runtime dictionary consulted in normal mode, and the
//! compile-time dictionary consulted while a colon definition is being
//! collected (it holds only `;` and `(`).

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use rpn_core::Value;

use crate::interpreter::Interpreter;
use crate::outcome::WordResult;
use crate::validator::Validator;

/// Opaque host handle passed to hosted word bodies at call time.
///
/// The interpreter never owns the subsystem behind the handle; hosts must
/// deregister their words or outlive the interpreter.
pub trait WordContext: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Send + Sync> WordContext for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Body of a built-in word. `rest` is the unconsumed remainder of the current
/// input line; words like `."` and `(` take a prefix of it.
pub type NativeBody = fn(&mut Interpreter, rest: &mut String) -> WordResult;

/// Body of a host-registered word.
pub type HostedBody =
    Arc<dyn Fn(&mut Interpreter, &dyn WordContext, &mut String) -> WordResult + Send + Sync>;

/// What runs when a word is invoked.
pub enum WordBody {
    /// Built-in function.
    Native(NativeBody),
    /// Host-registered callable with its context handle.
    Hosted {
        handler: HostedBody,
        context: Arc<dyn WordContext>,
    },
    /// Pushes a fixed value (constants, `STO` results).
    Constant(Value),
    /// Colon definition: captured tokens, re-interpreted on each call against
    /// the current dictionary.
    User(Arc<[String]>),
}

/// A dictionary entry.
pub struct WordDefinition {
    pub description: String,
    pub validator: Validator,
    pub body: WordBody,
}

impl WordDefinition {
    /// Built-in word.
    pub fn native(description: impl Into<String>, validator: Validator, body: NativeBody) -> Self {
        Self {
            description: description.into(),
            validator,
            body: WordBody::Native(body),
        }
    }

    /// Host word with its context handle.
    pub fn hosted(
        description: impl Into<String>,
        validator: Validator,
        handler: HostedBody,
        context: Arc<dyn WordContext>,
    ) -> Self {
        Self {
            description: description.into(),
            validator,
            body: WordBody::Hosted { handler, context },
        }
    }

    /// Word that pushes a fixed value.
    pub fn constant(description: impl Into<String>, value: Value) -> Self {
        Self {
            description: description.into(),
            validator: Validator::none(),
            body: WordBody::Constant(value),
        }
    }

    /// Colon definition over captured tokens.
    pub fn user(name: &str, tokens: Vec<String>) -> Self {
        Self {
            description: format!("user {}", name),
            validator: Validator::none(),
            body: WordBody::User(tokens.into()),
        }
    }
}

/// Name-to-definition mapping. Re-definition silently replaces, with a
/// host-visible warning on the log.
#[derive(Default)]
pub struct Dictionary {
    words: HashMap<String, Arc<WordDefinition>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a definition.
    pub fn insert(&mut self, name: impl Into<String>, def: WordDefinition) {
        let name = name.into();
        if self.words.insert(name.clone(), Arc::new(def)).is_some() {
            log::warn!("redefining word '{}'", name);
        }
    }

    /// Look up a definition.
    pub fn get(&self, name: &str) -> Option<&Arc<WordDefinition>> {
        self.words.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.words.contains_key(name)
    }

    /// All defined names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.words.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
