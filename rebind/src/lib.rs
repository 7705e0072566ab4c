//! A miniature object runtime demonstrating explicit receiver binding.
//!
//! Values in this runtime carry an explicit receiver: every call supplies the
//! object a callable executes against, the way method dispatch supplies an
//! implicit `this` in languages that have one. [`Value::bind`](val::Value)
//! fixes that receiver (and any number of leading arguments) up front,
//! producing a new callable that no longer depends on how it is invoked.
//!
//! The [`demo`] module walks through the classic motivating example: a method
//! detached from its object silently picks up the ambient receiver, and
//! binding it back to the object recovers the original behavior.

use structopt::StructOpt;

pub mod bind;
pub mod callable;
pub mod demo;
pub mod error;
pub mod obj;
pub mod output;
pub mod runtime;
pub mod ty;
pub mod val;

/// Receiver-binding walkthrough scenarios
#[derive(Debug, StructOpt)]
pub struct Rebind {
    /// scenarios to run (runs all when empty)
    pub scenarios: Vec<String>,
}
