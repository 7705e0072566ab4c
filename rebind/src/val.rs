//! Runtime values.

use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::bind::BoundFn;
use crate::callable::{Arity, Callable, NativeFn};
use crate::error::RuntimeResult;
use crate::obj::{Object, Template};
use crate::runtime::Runtime;
use crate::ty::Ty;


/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Num(f64),
    Str(Rc<str>),
    Object(Object),
    Callable(CallableValue),
}

impl Value {
    /// Get the type of this value.
    pub fn ty(&self) -> Ty {
        match self {
            Value::Nil => Ty::Nil,
            Value::Bool(_) => Ty::Bool,
            Value::Num(_) => Ty::Num,
            Value::Str(_) => Ty::Str,
            Value::Object(_) => Ty::Obj,
            Value::Callable(_) => Ty::Fun,
        }
    }

    /// Is this value an object constructed through a callable carrying
    /// `template`?
    ///
    /// Always false for non-object values.
    pub fn is_instance_of(&self, template: &Rc<Template>) -> bool {
        match self {
            Value::Object(obj) => obj.is_instance_of(template),
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Num(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Object(obj) => write!(f, "{obj}"),
            Value::Callable(c) => write!(f, "{c}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(b1), Value::Bool(b2)) => b1 == b2,
            (Value::Num(n1), Value::Num(n2)) => n1 == n2,
            (Value::Str(s1), Value::Str(s2)) => s1 == s2,
            (Value::Object(o1), Value::Object(o2)) => o1.ptr_eq(o2),
            (Value::Callable(c1), Value::Callable(c2)) => c1 == c2,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        if let Value::Num(n) = self {
            n == other
        } else {
            false
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        if let Value::Str(s) = self {
            s.as_ref() == *other
        } else {
            false
        }
    }
}

/// A callable value.
#[derive(Debug, Clone)]
pub enum CallableValue {
    Native(Rc<NativeFn>),
    Bound(Rc<BoundFn>),
}

impl CallableValue {
    fn as_callable(&self) -> &dyn Callable {
        match self {
            CallableValue::Native(f) => f.as_ref(),
            CallableValue::Bound(f) => f.as_ref(),
        }
    }
}

impl Callable for CallableValue {
    fn name(&self) -> Rc<str> {
        self.as_callable().name()
    }

    fn arity(&self) -> Arity {
        self.as_callable().arity()
    }

    fn template(&self) -> Option<Rc<Template>> {
        self.as_callable().template()
    }

    fn call(
        &self,
        rt: &mut Runtime<'_>,
        receiver: &Value,
        args: &[Value],
    ) -> RuntimeResult<Value> {
        self.as_callable().call(rt, receiver, args)
    }
}

// Callable equality is handle identity, like object equality.
impl PartialEq for CallableValue {
    fn eq(&self, other: &CallableValue) -> bool {
        match (self, other) {
            (CallableValue::Native(f1), CallableValue::Native(f2)) => Rc::ptr_eq(f1, f2),
            (CallableValue::Bound(f1), CallableValue::Bound(f2)) => Rc::ptr_eq(f1, f2),
            _ => false,
        }
    }
}

impl Display for CallableValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CallableValue::Native(fun) => write!(f, "<fn {}>", fun.name()),
            CallableValue::Bound(fun) => write!(f, "<bound fn {}>", fun.name()),
        }
    }
}
