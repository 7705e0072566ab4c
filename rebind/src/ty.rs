//! Runtime value types.

use std::fmt::{self, Display, Formatter};

/// The dynamic type of a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ty {
    Nil,
    Bool,
    Num,
    Str,
    Fun,
    Obj,
}

impl Display for Ty {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Ty::Nil => write!(f, "Nil"),
            Ty::Bool => write!(f, "Bool"),
            Ty::Num => write!(f, "Num"),
            Ty::Str => write!(f, "Str"),
            Ty::Fun => write!(f, "Fun"),
            Ty::Obj => write!(f, "Obj"),
        }
    }
}
