//! Objects and constructor templates.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::val::Value;

/// A mutable bag of named properties with reference semantics.
///
/// Cloning an `Object` yields another handle to the same underlying data;
/// equality between objects is handle identity, not structure.
#[derive(Debug, Clone, Default)]
pub struct Object {
    data: Rc<RefCell<ObjectData>>,
}

#[derive(Debug, Default)]
struct ObjectData {
    template: Option<Rc<Template>>,
    props: HashMap<Rc<str>, Value>,
}

impl Object {
    pub fn new() -> Self {
        Object::default()
    }

    /// Create an object already stamped with a template.
    ///
    /// The template is fixed for the object's lifetime; construction is the
    /// only point at which one is attached.
    pub fn with_template(template: Option<Rc<Template>>) -> Self {
        Object {
            data: Rc::new(RefCell::new(ObjectData {
                template,
                props: HashMap::new(),
            })),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.data.borrow().props.get(name).cloned()
    }

    pub fn set(&self, name: impl Into<Rc<str>>, val: Value) {
        self.data.borrow_mut().props.insert(name.into(), val);
    }

    pub fn template(&self) -> Option<Rc<Template>> {
        self.data.borrow().template.clone()
    }

    /// Was this object constructed through a callable carrying `template`?
    pub fn is_instance_of(&self, template: &Rc<Template>) -> bool {
        self.template()
            .map_or(false, |t| Rc::ptr_eq(&t, template))
    }

    /// Do these handles refer to the same object?
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.template() {
            Some(template) => write!(f, "<{} instance>", template.name()),
            None => write!(f, "<object>"),
        }
    }
}

/// The shared descriptor identifying which constructor produced an object.
///
/// Templates have identity, not structure: two objects classify together
/// exactly when their template handles point to the same descriptor. Both a
/// callable and every callable bound from it hold the same handle.
#[derive(Debug)]
pub struct Template {
    name: Rc<str>,
}

impl Template {
    pub fn new(name: impl Into<Rc<str>>) -> Rc<Self> {
        Rc::new(Template { name: name.into() })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
