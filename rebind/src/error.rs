//! Runtime errors.

use std::rc::Rc;

use thiserror::Error;

use crate::ty::Ty;

/// A runtime error.
///
/// Errors raised inside a callable propagate to its caller unchanged; nothing
/// in the call machinery wraps, translates, or retries them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// A non-callable value was called, bound, or constructed.
    #[error("cannot call or bind value of type {0}")]
    InvalidOperand(Ty),

    /// A callable with an exact arity was invoked with the wrong number of
    /// arguments.
    #[error("expected {expected} arguments, got {got}")]
    Arity { expected: u8, got: usize },

    /// A property lookup on an object found nothing.
    #[error("undefined property `{0}`")]
    UndefinedProperty(Rc<str>),

    /// A value had the wrong dynamic type for the operation consuming it.
    #[error("expected value of type {expected}, got {got}")]
    TypeMismatch { expected: Ty, got: Ty },

    /// An error raised by a native function body.
    #[error("{0}")]
    Raised(Rc<str>),
}

/// A `Result` type specialized to runtime errors.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
