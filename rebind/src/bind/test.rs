use std::rc::Rc;

use crate::callable::{Arity, Callable, NativeFn};
use crate::error::RuntimeError;
use crate::obj::{Object, Template};
use crate::runtime::Runtime;
use crate::ty::Ty;
use crate::val::Value;

fn num(n: f64) -> Value {
    Value::Num(n)
}

/// A variadic probe that renders its receiver and arguments into a string,
/// making call shapes directly comparable.
fn probe() -> Value {
    NativeFn::new("probe", Arity::Variadic, |_, recv, args| {
        let mut out = format!("recv={recv}");
        for arg in args {
            out.push_str(&format!(" {arg}"));
        }
        Ok(Value::Str(out.into()))
    })
    .into_value()
}

/// A zero-argument function returning the named property of its receiver.
fn getter(prop: &'static str) -> Value {
    NativeFn::new("get", Arity::Exact(0), move |_, recv, _| {
        Ok(match recv {
            Value::Object(obj) => obj.get(prop).unwrap_or(Value::Nil),
            _ => Value::Nil,
        })
    })
    .into_value()
}

fn adder() -> Value {
    NativeFn::new("add", Arity::Exact(2), |_, _, args| {
        match (&args[0], &args[1]) {
            (Value::Num(a), Value::Num(b)) => Ok(Value::Num(a + b)),
            _ => Err(RuntimeError::TypeMismatch {
                expected: Ty::Num,
                got: args[0].ty(),
            }),
        }
    })
    .into_value()
}

fn point_ctor(template: &Rc<Template>) -> Value {
    NativeFn::new("Point", Arity::Variadic, |_, recv, args| {
        if let (Value::Object(obj), Some(x)) = (recv, args.first()) {
            obj.set("x", x.clone());
        }
        Ok(Value::Nil)
    })
    .with_template(Rc::clone(template))
    .into_value()
}

#[test]
fn bound_call_matches_direct_call() {
    let mut rt = Runtime::new();
    let f = probe();
    let ctx = Object::new();

    let direct = rt
        .call_value(
            &f,
            Value::Object(ctx.clone()),
            &[num(1.0), num(2.0), num(3.0)],
        )
        .unwrap();

    let bound = f
        .bind(Value::Object(ctx.clone()), &[num(1.0), num(2.0)])
        .unwrap();
    let via_bound = rt.call_value(&bound, Value::Nil, &[num(3.0)]).unwrap();

    assert_eq!(direct, via_bound);
}

#[test]
fn presupplied_arguments_come_first() {
    let mut rt = Runtime::new();
    let bound = probe().bind(Value::Nil, &[num(1.0), num(2.0)]).unwrap();
    let res = rt
        .call_value(&bound, Value::Nil, &[num(3.0), num(4.0)])
        .unwrap();
    assert_eq!(res, "recv=<object> 1 2 3 4");
}

#[test]
fn captured_context_wins_over_call_site() {
    let mut rt = Runtime::new();
    let owner = Object::new();
    owner.set("x", num(81.0));

    let bound = getter("x")
        .bind(Value::Object(owner.clone()), &[])
        .unwrap();

    // Even re-attached to another object and invoked as its method, the
    // bound function keeps the original receiver.
    let other = Object::new();
    other.set("x", num(13.0));
    other.set("getX", bound.clone());

    assert_eq!(rt.call_method(&other, "getX", &[]).unwrap(), 81.0);
    assert_eq!(
        rt.call_value(&bound, Value::Object(other.clone()), &[])
            .unwrap(),
        81.0
    );
}

#[test]
fn nil_context_falls_back_to_globals() {
    let mut rt = Runtime::new();
    rt.globals().set("x", num(9.0));

    let module = Object::new();
    module.set("x", num(81.0));

    let f = getter("x");
    assert_eq!(rt.call_value(&f, Value::Nil, &[]).unwrap(), 9.0);

    let bound = f.bind(Value::Object(module.clone()), &[]).unwrap();
    assert_eq!(rt.call_value(&bound, Value::Nil, &[]).unwrap(), 81.0);

    // Binding with a Nil context keeps the ambient fallback.
    let bound_nil = f.bind(Value::Nil, &[]).unwrap();
    assert_eq!(rt.call_value(&bound_nil, Value::Nil, &[]).unwrap(), 9.0);
}

#[test]
fn partial_application() {
    let mut rt = Runtime::new();
    let add_five = adder().bind(Value::Nil, &[num(5.0)]).unwrap();
    assert_eq!(
        rt.call_value(&add_five, Value::Nil, &[num(10.0)]).unwrap(),
        15.0
    );
}

#[test]
fn repeated_calls_do_not_disturb_captures() {
    let mut rt = Runtime::new();
    let bound = probe().bind(Value::Nil, &[num(1.0)]).unwrap();

    let first = rt.call_value(&bound, Value::Nil, &[num(2.0)]).unwrap();
    let _ = rt
        .call_value(&bound, Value::Nil, &[num(7.0), num(8.0)])
        .unwrap();
    let again = rt.call_value(&bound, Value::Nil, &[num(2.0)]).unwrap();

    assert_eq!(first, again);
}

#[test]
fn template_propagates_through_bind() {
    let mut rt = Runtime::new();
    let template = Template::new("Point");
    let ctor = point_ctor(&template);

    let via_original = rt.construct(&ctor, &[num(1.0)]).unwrap();
    assert!(via_original.is_instance_of(&template));

    let bound = ctor.bind(Value::Nil, &[num(0.0)]).unwrap();
    let via_bound = rt.construct(&bound, &[]).unwrap();
    assert!(via_bound.is_instance_of(&template));
}

#[test]
fn bound_constructor_writes_through_its_context() {
    // Construction through a bound function stamps the template on the new
    // object, but the captured context still receives the property writes.
    let mut rt = Runtime::new();
    let template = Template::new("Point");
    let ctor = point_ctor(&template);

    let ctx = Object::new();
    let bound = ctor.bind(Value::Object(ctx.clone()), &[]).unwrap();
    let made = rt.construct(&bound, &[num(7.0)]).unwrap();

    assert!(made.is_instance_of(&template));
    assert_eq!(ctx.get("x").unwrap(), 7.0);

    let Value::Object(made) = made else {
        panic!("construct returned a non-object");
    };
    assert!(made.get("x").is_none());
}

#[test]
fn binding_a_non_callable_is_an_error() {
    let err = num(4.0).bind(Value::Nil, &[]).unwrap_err();
    assert_eq!(err, RuntimeError::InvalidOperand(Ty::Num));

    let err = Value::Str("f".into()).bind(Value::Nil, &[]).unwrap_err();
    assert_eq!(err, RuntimeError::InvalidOperand(Ty::Str));
}

#[test]
fn invocation_errors_pass_through_unchanged() {
    let mut rt = Runtime::new();
    let boom = NativeFn::new("boom", Arity::Variadic, |_, _, _| {
        Err(RuntimeError::Raised("boom".into()))
    })
    .into_value();

    let direct = rt.call_value(&boom, Value::Nil, &[]).unwrap_err();

    let bound = boom.bind(Value::Nil, &[num(1.0)]).unwrap();
    let via_bound = rt.call_value(&bound, Value::Nil, &[]).unwrap_err();

    assert_eq!(direct, via_bound);
}

#[test]
fn bound_arity_discounts_presupplied_arguments() {
    let mut rt = Runtime::new();
    let add_five = adder().bind(Value::Nil, &[num(5.0)]).unwrap();

    let Value::Callable(c) = &add_five else {
        panic!("bind returned a non-callable");
    };
    assert_eq!(c.arity(), Arity::Exact(1));

    let err = rt
        .call_value(&add_five, Value::Nil, &[num(1.0), num(2.0)])
        .unwrap_err();
    assert_eq!(err, RuntimeError::Arity { expected: 1, got: 2 });
}

#[test]
fn overfull_binding_saturates_to_zero_arity() {
    let over = adder()
        .bind(Value::Nil, &[num(1.0), num(2.0), num(3.0)])
        .unwrap();

    let Value::Callable(c) = &over else {
        panic!("bind returned a non-callable");
    };
    assert_eq!(c.arity(), Arity::Exact(0));
}

#[test]
fn rebinding_keeps_the_first_context() {
    let mut rt = Runtime::new();
    let first = Object::new();
    first.set("x", num(1.0));
    let second = Object::new();
    second.set("x", num(2.0));

    let bound = getter("x").bind(Value::Object(first.clone()), &[]).unwrap();
    let rebound = bound.bind(Value::Object(second.clone()), &[]).unwrap();

    assert_eq!(rt.call_value(&rebound, Value::Nil, &[]).unwrap(), 1.0);
}

#[test]
fn rebinding_concatenates_presupplied_arguments() {
    let mut rt = Runtime::new();
    let once = probe().bind(Value::Nil, &[num(1.0)]).unwrap();
    let twice = once.bind(Value::Nil, &[num(2.0)]).unwrap();

    let res = rt.call_value(&twice, Value::Nil, &[num(3.0)]).unwrap();
    assert_eq!(res, "recv=<object> 1 2 3");
}
