//! Walkthrough scenarios exercising receiver binding.
//!
//! Each scenario prints a short transcript through the runtime's output
//! stream, so the same code drives the demo binary and the snapshot tests.

use std::rc::Rc;

use crate::callable::{Arity, NativeFn};
use crate::error::{RuntimeError, RuntimeResult};
use crate::obj::{Object, Template};
use crate::runtime::Runtime;
use crate::ty::Ty;
use crate::val::Value;


/// Names of the available scenarios, in presentation order.
pub const SCENARIOS: &[&str] = &["context-loss", "partial-application", "construction"];

/// Run a single scenario by name.
pub fn run(rt: &mut Runtime<'_>, scenario: &str) -> RuntimeResult<()> {
    match scenario {
        "context-loss" => context_loss(rt),
        "partial-application" => partial_application(rt),
        "construction" => construction(rt),
        _ => Err(RuntimeError::Raised(
            format!(
                "unknown scenario `{scenario}` (available: {})",
                SCENARIOS.join(", ")
            )
            .into(),
        )),
    }
}

/// A method detached from its object executes against the ambient receiver;
/// binding it back to the object recovers the original behavior.
fn context_loss(rt: &mut Runtime<'_>) -> RuntimeResult<()> {
    rt.globals().set("x", Value::Num(9.0));

    let module = Object::new();
    module.set("x", Value::Num(81.0));

    let get_x = NativeFn::new("getX", Arity::Exact(0), |_, recv, _| {
        Ok(match recv {
            Value::Object(obj) => obj.get("x").unwrap_or(Value::Nil),
            _ => Value::Nil,
        })
    })
    .into_value();
    module.set("getX", get_x.clone());

    let res = rt.call_method(&module, "getX", &[])?;
    rt.print(format_args!("module.getX() = {res}"));

    // Detached: no receiver at the call site, so the globals stand in.
    let retrieve_x = get_x;
    let res = rt.call_value(&retrieve_x, Value::Nil, &[])?;
    rt.print(format_args!("retrieveX() = {res}"));

    let bound_get_x = retrieve_x.bind(Value::Object(module.clone()), &[])?;
    let res = rt.call_value(&bound_get_x, Value::Nil, &[])?;
    rt.print(format_args!("boundGetX() = {res}"));

    Ok(())
}

/// Presupplying leading arguments turns a two-argument function into a
/// one-argument one.
fn partial_application(rt: &mut Runtime<'_>) -> RuntimeResult<()> {
    let add = NativeFn::new("add", Arity::Exact(2), |_, _, args| {
        Ok(Value::Num(expect_num(&args[0])? + expect_num(&args[1])?))
    })
    .into_value();

    let res = rt.call_value(&add, Value::Nil, &[Value::Num(2.0), Value::Num(3.0)])?;
    rt.print(format_args!("add(2, 3) = {res}"));

    let add_five = add.bind(Value::Nil, &[Value::Num(5.0)])?;
    let res = rt.call_value(&add_five, Value::Nil, &[Value::Num(10.0)])?;
    rt.print(format_args!("addFive(10) = {res}"));

    Ok(())
}

/// Binding does not disturb a callable's constructor role: instances made
/// through the bound function classify the same as instances of the original.
fn construction(rt: &mut Runtime<'_>) -> RuntimeResult<()> {
    let template = Template::new("Point");

    let point = NativeFn::new("Point", Arity::Exact(2), |_, recv, args| {
        if let Value::Object(obj) = recv {
            obj.set("x", args[0].clone());
            obj.set("y", args[1].clone());
        }
        Ok(Value::Nil)
    })
    .with_template(Rc::clone(&template))
    .into_value();

    let p = rt.construct(&point, &[Value::Num(1.0), Value::Num(2.0)])?;
    rt.print(format_args!("p = {p}"));
    rt.print(format_args!("p is Point: {}", p.is_instance_of(&template)));

    let bound_point = point.bind(Value::Nil, &[])?;
    let q = rt.construct(&bound_point, &[Value::Num(3.0), Value::Num(4.0)])?;
    rt.print(format_args!("q is Point: {}", q.is_instance_of(&template)));

    Ok(())
}

fn expect_num(val: &Value) -> RuntimeResult<f64> {
    match val {
        Value::Num(n) => Ok(*n),
        val => Err(RuntimeError::TypeMismatch {
            expected: Ty::Num,
            got: val.ty(),
        }),
    }
}
