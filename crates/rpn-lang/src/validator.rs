//! Stack pre-condition checks.
//!
//! Every dictionary entry carries a [`Validator`] which the runtime evaluator
//! runs before invoking the body. A successful match guarantees the body sees
//! at least the declared number of items with the declared tags.

use rpn_core::{Stack, TypeTag};
use smallvec::SmallVec;

/// Parameter type in a word signature.
///
/// `Number` and `Any` are wildcards that only exist in signatures; they are
/// never constructed as stack values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamType {
    Integer,
    Double,
    Boolean,
    String,
    Vec3,
    Array,
    Object,
    /// Integer or Double.
    Number,
    /// Matches every runtime tag.
    Any,
}

impl ParamType {
    /// Does a value with `tag` satisfy this parameter?
    pub fn matches(self, tag: TypeTag) -> bool {
        match self {
            ParamType::Integer => tag == TypeTag::Integer,
            ParamType::Double => tag == TypeTag::Double,
            ParamType::Boolean => tag == TypeTag::Boolean,
            ParamType::String => tag == TypeTag::String,
            ParamType::Vec3 => tag == TypeTag::Vec3,
            ParamType::Array => tag == TypeTag::Array,
            ParamType::Object => tag == TypeTag::Object,
            ParamType::Number => matches!(tag, TypeTag::Integer | TypeTag::Double),
            ParamType::Any => true,
        }
    }
}

/// A word's type signature, positions top-down (position 1 = topmost).
pub type Signature = SmallVec<[ParamType; 4]>;

/// Why a validator rejected the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidatorFailure {
    /// Not enough items.
    Underflow,
    /// Enough items, wrong tags.
    TypeMismatch,
}

/// Pre-condition on the stack for a word invocation.
#[derive(Clone, Debug)]
pub enum Validator {
    /// Requires `depth() >= n`.
    StackSize(usize),
    /// Requires the top items to match the signature, top-down.
    StrictType(Signature),
    /// Succeeds if any alternative succeeds; declaration order is the
    /// documented overload-resolution order.
    AnyOf(Vec<Validator>),
}

impl Validator {
    /// A validator that accepts any stack.
    pub fn none() -> Self {
        Validator::StackSize(0)
    }

    /// Strict signature from a slice, top-down.
    pub fn types(sig: &[ParamType]) -> Self {
        Validator::StrictType(Signature::from_slice(sig))
    }

    /// Overload set; first match wins.
    pub fn any_of(alternatives: Vec<Validator>) -> Self {
        Validator::AnyOf(alternatives)
    }

    /// Check the stack. Does not mutate.
    pub fn check(&self, stack: &Stack) -> Result<(), ValidatorFailure> {
        match self {
            Validator::StackSize(n) => {
                if stack.depth() < *n {
                    Err(ValidatorFailure::Underflow)
                } else {
                    Ok(())
                }
            }
            Validator::StrictType(sig) => {
                if stack.depth() < sig.len() {
                    return Err(ValidatorFailure::Underflow);
                }
                for (i, param) in sig.iter().enumerate() {
                    let tag = match stack.peek(i + 1) {
                        Ok(v) => v.tag(),
                        Err(_) => return Err(ValidatorFailure::Underflow),
                    };
                    if !param.matches(tag) {
                        return Err(ValidatorFailure::TypeMismatch);
                    }
                }
                Ok(())
            }
            Validator::AnyOf(alternatives) => {
                let mut failure = ValidatorFailure::Underflow;
                for alt in alternatives {
                    match alt.check(stack) {
                        Ok(()) => return Ok(()),
                        Err(ValidatorFailure::TypeMismatch) => {
                            failure = ValidatorFailure::TypeMismatch;
                        }
                        Err(ValidatorFailure::Underflow) => {}
                    }
                }
                Err(failure)
            }
        }
    }
}
