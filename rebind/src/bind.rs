//! Fixing a callable's receiver and leading arguments.

use std::rc::Rc;

use crate::callable::{Arity, Callable};
use crate::error::{RuntimeError, RuntimeResult};
use crate::obj::Template;
use crate::runtime::Runtime;
use crate::val::{CallableValue, Value};

#[cfg(test)]
mod test;

impl Value {
    /// Produce a new callable with the receiver and leading arguments fixed.
    ///
    /// `context` is captured as the receiver for every future invocation,
    /// overriding whatever receiver the call site supplies; a `Nil` context
    /// defers to the ambient receiver at call time. The presupplied arguments
    /// are prepended, in order, ahead of whatever arguments each call
    /// supplies.
    ///
    /// Errors with [`RuntimeError::InvalidOperand`] if `self` is not
    /// callable.
    pub fn bind(&self, context: Value, presupplied: &[Value]) -> RuntimeResult<Value> {
        match self {
            Value::Callable(target) => Ok(Value::Callable(
                target.bind(context, presupplied.to_vec()),
            )),
            _ => Err(RuntimeError::InvalidOperand(self.ty())),
        }
    }
}

impl CallableValue {
    /// See [`Value::bind`].
    pub fn bind(&self, context: Value, presupplied: Vec<Value>) -> CallableValue {
        CallableValue::Bound(Rc::new(BoundFn::new(self.clone(), context, presupplied)))
    }
}

/// A callable with its receiver and leading arguments fixed.
///
/// Everything a `BoundFn` closes over is captured at construction and never
/// mutated afterwards: the target callable, the context, the presupplied
/// arguments, and the target's template. Binding an already-bound callable
/// layers another capture on top; the innermost context still wins at call
/// time, so the first binding is the one that sticks.
#[derive(Debug)]
pub struct BoundFn {
    target: CallableValue,
    context: Value,
    presupplied: Vec<Value>,
    template: Option<Rc<Template>>,
}

impl BoundFn {
    fn new(target: CallableValue, context: Value, presupplied: Vec<Value>) -> Self {
        // The target's template carries over so that instances constructed
        // through the bound callable classify the same as instances of the
        // target.
        let template = target.template();
        BoundFn {
            target,
            context,
            presupplied,
            template,
        }
    }
}

impl Callable for BoundFn {
    fn name(&self) -> Rc<str> {
        self.target.name()
    }

    fn arity(&self) -> Arity {
        match self.target.arity() {
            Arity::Exact(n) => Arity::Exact(n.saturating_sub(self.presupplied.len() as u8)),
            Arity::Variadic => Arity::Variadic,
        }
    }

    fn template(&self) -> Option<Rc<Template>> {
        self.template.clone()
    }

    fn call(
        &self,
        rt: &mut Runtime<'_>,
        _receiver: &Value,
        args: &[Value],
    ) -> RuntimeResult<Value> {
        // The call-site receiver is discarded; the captured context stands in
        // for it, falling back to the ambient receiver when it is Nil.
        let receiver = match &self.context {
            Value::Nil => rt.ambient_receiver(),
            context => context.clone(),
        };

        let mut full_args = self.presupplied.clone();
        full_args.extend_from_slice(args);

        self.target.call(rt, &receiver, &full_args)
    }
}
