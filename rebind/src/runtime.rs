//! Call dispatch, the ambient receiver, and runtime output.

use std::fmt::Display;
use std::io::Write;

use crate::callable::Callable;
use crate::error::{RuntimeError, RuntimeResult};
use crate::obj::Object;
use crate::output::OutputStream;
use crate::val::Value;


/// A single-threaded host environment for callable values.
///
/// The runtime owns the global object, which doubles as the ambient receiver:
/// a call that supplies no receiver of its own executes against the globals,
/// the same way a detached method call falls back to the global scope in the
/// semantics being modeled.
pub struct Runtime<'out> {
    globals: Object,
    output: OutputStream<'out>,
}

impl Runtime<'_> {
    pub fn new() -> Runtime<'static> {
        Runtime {
            globals: Object::new(),
            output: OutputStream::default(),
        }
    }

    pub fn with_output<'out>(self, output: OutputStream<'out>) -> Runtime<'out> {
        Runtime {
            globals: self.globals,
            output,
        }
    }

    pub fn with_vec_output<'out>(self, output: &'out mut Vec<u8>) -> Runtime<'out> {
        self.with_output(OutputStream::with(output))
    }

    pub fn globals(&self) -> &Object {
        &self.globals
    }

    /// The receiver used when a call does not supply one.
    pub fn ambient_receiver(&self) -> Value {
        Value::Object(self.globals.clone())
    }

    /// Write a line to the runtime's output stream.
    pub fn print(&mut self, val: impl Display) {
        writeln!(self.output, "{val}").unwrap();
    }
}

impl Runtime<'_> {
    /// Invoke a callable value.
    ///
    /// A `Nil` receiver resolves to the ambient receiver before dispatch.
    /// Arity is checked against the callee's reported arity; errors raised by
    /// the callee propagate unchanged.
    pub fn call_value(
        &mut self,
        callee: &Value,
        receiver: Value,
        args: &[Value],
    ) -> RuntimeResult<Value> {
        let callable = match callee {
            Value::Callable(c) => c.clone(),
            _ => return Err(RuntimeError::InvalidOperand(callee.ty())),
        };

        callable.arity().check(args.len())?;

        let receiver = match receiver {
            Value::Nil => self.ambient_receiver(),
            receiver => receiver,
        };

        callable.call(self, &receiver, args)
    }

    /// Look up `name` on `obj` and invoke it with `obj` as the receiver.
    pub fn call_method(
        &mut self,
        obj: &Object,
        name: &str,
        args: &[Value],
    ) -> RuntimeResult<Value> {
        let method = obj
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedProperty(name.into()))?;
        self.call_value(&method, Value::Object(obj.clone()), args)
    }

    /// Invoke a callable in a constructor role.
    ///
    /// A fresh object is created, stamped with the callee's template, and
    /// passed as the receiver; the callee's own return value is discarded and
    /// the new object returned.
    pub fn construct(&mut self, callee: &Value, args: &[Value]) -> RuntimeResult<Value> {
        let template = match callee {
            Value::Callable(c) => c.template(),
            _ => return Err(RuntimeError::InvalidOperand(callee.ty())),
        };

        let obj = Object::with_template(template);
        self.call_value(callee, Value::Object(obj.clone()), args)?;
        Ok(Value::Object(obj))
    }
}
