//! Callable runtime values.

use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use crate::error::{RuntimeError, RuntimeResult};
use crate::obj::Template;
use crate::runtime::Runtime;
use crate::val::{CallableValue, Value};

/// A value that can be invoked with a receiver and an argument list.
///
/// The receiver is an explicit parameter here: the call machinery resolves it
/// before dispatch, so implementations never have to reason about where it
/// came from.
pub trait Callable {
    fn name(&self) -> Rc<str>;

    fn arity(&self) -> Arity;

    /// The template stamped onto objects constructed through this callable,
    /// if it has a constructor role.
    fn template(&self) -> Option<Rc<Template>>;

    fn call(
        &self,
        rt: &mut Runtime<'_>,
        receiver: &Value,
        args: &[Value],
    ) -> RuntimeResult<Value>;
}

/// The number of call-time arguments a callable accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(u8),
    Variadic,
}

impl Arity {
    pub fn check(self, got: usize) -> RuntimeResult<()> {
        match self {
            Arity::Exact(expected) if got != expected as usize => {
                Err(RuntimeError::Arity { expected, got })
            }
            _ => Ok(()),
        }
    }
}

/// A function implemented in Rust.
pub struct NativeFn {
    name: Rc<str>,
    arity: Arity,
    template: Option<Rc<Template>>,
    imp: Box<NativeImpl>,
}

/// The boxed body of a [`NativeFn`].
pub type NativeImpl = dyn Fn(&mut Runtime<'_>, &Value, &[Value]) -> RuntimeResult<Value>;

impl NativeFn {
    pub fn new(
        name: impl Into<Rc<str>>,
        arity: Arity,
        imp: impl Fn(&mut Runtime<'_>, &Value, &[Value]) -> RuntimeResult<Value> + 'static,
    ) -> Self {
        NativeFn {
            name: name.into(),
            arity,
            template: None,
            imp: Box::new(imp),
        }
    }

    /// Attach a template, marking this function as usable in a constructor
    /// role.
    pub fn with_template(self, template: Rc<Template>) -> Self {
        NativeFn {
            template: Some(template),
            ..self
        }
    }

    pub fn into_value(self) -> Value {
        Value::Callable(CallableValue::Native(Rc::new(self)))
    }
}

impl Callable for NativeFn {
    fn name(&self) -> Rc<str> {
        Rc::clone(&self.name)
    }

    fn arity(&self) -> Arity {
        self.arity
    }

    fn template(&self) -> Option<Rc<Template>> {
        self.template.clone()
    }

    fn call(
        &self,
        rt: &mut Runtime<'_>,
        receiver: &Value,
        args: &[Value],
    ) -> RuntimeResult<Value> {
        (self.imp)(rt, receiver, args)
    }
}

impl Debug for NativeFn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFn")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}
