//! Compact structural rendering of the model.
//!
//! This is report output for the CLI and test assertions, not a type-syntax
//! printer: `ref(int)`, `array(const int, 5)`, `fn(int, char) -> void`.

use std::fmt;

use crate::storage::Storage;
use crate::ty::{Binding, Qualifiers, Ty, TyKind};

impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_const, self.is_volatile) {
            (true, true) => write!(f, "const volatile"),
            (true, false) => write!(f, "const"),
            (false, true) => write!(f, "volatile"),
            (false, false) => Ok(()),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Binding::Direct => "direct",
            Binding::Lvalue => "lvalue",
            Binding::Rvalue => "rvalue",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.quals.is_empty() {
            write!(f, "{} ", self.quals)?;
        }
        self.kind.fmt(f)
    }
}

impl fmt::Display for TyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TyKind::Named(name) => f.write_str(name),
            TyKind::RefMark(payload) => write!(f, "ref({payload})"),
            TyKind::Array {
                element,
                len: Some(len),
            } => write!(f, "array({element}, {len})"),
            TyKind::Array { element, len: None } => write!(f, "array({element})"),
            TyKind::Function { params, ret } => {
                f.write_str("fn(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    p.fmt(f)?;
                }
                write!(f, ") -> {ret}")
            }
            TyKind::Pointer(pointee) => write!(f, "ptr({pointee})"),
        }
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Storage::Value(ty) => write!(f, "value {ty}"),
            Storage::Alias(ty) => write!(f, "alias {ty}"),
        }
    }
}
