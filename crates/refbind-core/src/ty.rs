//! Checked type model.
//!
//! Everything here is immutable value data. The classification branches
//! (named / ref-mark / array / function / pointer) form a sum type, so a
//! descriptor claiming two classifications at once cannot be constructed.
//! Permissive input lives in the `raw` layer and is validated on conversion.

/// Const/volatile qualifier set applied to a type position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Serialize)]
pub struct Qualifiers {
    #[serde(rename = "const")]
    pub is_const: bool,
    #[serde(rename = "volatile")]
    pub is_volatile: bool,
}

impl Qualifiers {
    /// No qualifiers.
    pub const NONE: Self = Self {
        is_const: false,
        is_volatile: false,
    };

    /// `const` only.
    pub const CONST: Self = Self {
        is_const: true,
        is_volatile: false,
    };

    /// `volatile` only.
    pub const VOLATILE: Self = Self {
        is_const: false,
        is_volatile: true,
    };

    pub fn new(is_const: bool, is_volatile: bool) -> Self {
        Self {
            is_const,
            is_volatile,
        }
    }

    pub fn is_empty(self) -> bool {
        !self.is_const && !self.is_volatile
    }

    /// Combine two qualifier sets: a qualifier present in either is present
    /// in the result.
    pub fn union(self, other: Self) -> Self {
        Self {
            is_const: self.is_const || other.is_const,
            is_volatile: self.is_volatile || other.is_volatile,
        }
    }
}

/// Reference-binding mode of a declared argument.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Binding {
    /// Plain by-value declaration, no reference involved.
    Direct,
    /// Mutable alias (lvalue-reference-like).
    Lvalue,
    /// Temporary binding (rvalue-reference-like).
    Rvalue,
}

impl Binding {
    pub fn is_direct(self) -> bool {
        self == Self::Direct
    }

    /// Whether the argument is bound by reference at all.
    pub fn is_reference(self) -> bool {
        matches!(self, Self::Lvalue | Self::Rvalue)
    }

    pub fn is_rvalue(self) -> bool {
        self == Self::Rvalue
    }
}

/// The mutually exclusive classification of a type position.
///
/// `Pointer` appears in normalization *output* (array and function decay);
/// on input it is just another self-normalizing type.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TyKind {
    /// Opaque named base type, compared only for equality.
    Named(String),
    /// Instance of the explicit reference-marker wrapper.
    ///
    /// The payload is carried opaquely: no rule inspects or narrows it, and
    /// a nested marker stays nested.
    RefMark(Box<Ty>),
    /// Array with an element type and optional known extent.
    Array {
        element: Box<Ty>,
        len: Option<u64>,
    },
    /// Function type.
    Function {
        params: Vec<Ty>,
        ret: Box<Ty>,
    },
    /// Pointer to a pointee type.
    Pointer(Box<Ty>),
}

/// A type position: qualifiers plus classification.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
pub struct Ty {
    pub quals: Qualifiers,
    pub kind: TyKind,
}

impl Ty {
    pub fn new(quals: Qualifiers, kind: TyKind) -> Self {
        Self { quals, kind }
    }

    /// Unqualified named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Qualifiers::NONE, TyKind::Named(name.into()))
    }

    /// Unqualified reference-marker wrapper around `payload`.
    pub fn ref_mark(payload: Ty) -> Self {
        Self::new(Qualifiers::NONE, TyKind::RefMark(Box::new(payload)))
    }

    /// Unqualified array of `element`, with optional extent.
    pub fn array(element: Ty, len: Option<u64>) -> Self {
        Self::new(
            Qualifiers::NONE,
            TyKind::Array {
                element: Box::new(element),
                len,
            },
        )
    }

    /// Function type.
    pub fn function(params: Vec<Ty>, ret: Ty) -> Self {
        Self::new(
            Qualifiers::NONE,
            TyKind::Function {
                params,
                ret: Box::new(ret),
            },
        )
    }

    /// Unqualified pointer to `pointee`.
    pub fn pointer(pointee: Ty) -> Self {
        Self::new(Qualifiers::NONE, TyKind::Pointer(Box::new(pointee)))
    }

    /// Replace the top-level qualifiers.
    pub fn with_quals(mut self, quals: Qualifiers) -> Self {
        self.quals = quals;
        self
    }

    /// Drop the top-level qualifiers. Nested qualifiers are part of the
    /// type's identity and are untouched.
    pub fn strip_quals(mut self) -> Self {
        self.quals = Qualifiers::NONE;
        self
    }

    pub fn is_ref_mark(&self) -> bool {
        matches!(self.kind, TyKind::RefMark(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, TyKind::Array { .. })
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, TyKind::Function { .. })
    }
}

/// A declared argument as seen at the call site: the reference-binding mode
/// plus the residual type it binds to.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
pub struct Param {
    pub binding: Binding,
    pub ty: Ty,
}

impl Param {
    pub fn new(binding: Binding, ty: Ty) -> Self {
        Self { binding, ty }
    }

    /// By-value argument.
    pub fn direct(ty: Ty) -> Self {
        Self::new(Binding::Direct, ty)
    }

    /// Argument bound as a mutable alias.
    pub fn lvalue(ty: Ty) -> Self {
        Self::new(Binding::Lvalue, ty)
    }

    /// Argument bound to a temporary.
    pub fn rvalue(ty: Ty) -> Self {
        Self::new(Binding::Rvalue, ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifier_union() {
        assert_eq!(
            Qualifiers::CONST.union(Qualifiers::VOLATILE),
            Qualifiers::new(true, true)
        );
        assert_eq!(Qualifiers::NONE.union(Qualifiers::NONE), Qualifiers::NONE);
        assert_eq!(Qualifiers::CONST.union(Qualifiers::CONST), Qualifiers::CONST);
    }

    #[test]
    fn qualifier_is_empty() {
        assert!(Qualifiers::NONE.is_empty());
        assert!(!Qualifiers::CONST.is_empty());
        assert!(!Qualifiers::VOLATILE.is_empty());
    }

    #[test]
    fn binding_predicates() {
        assert!(Binding::Direct.is_direct());
        assert!(!Binding::Direct.is_reference());
        assert!(Binding::Lvalue.is_reference());
        assert!(!Binding::Lvalue.is_rvalue());
        assert!(Binding::Rvalue.is_reference());
        assert!(Binding::Rvalue.is_rvalue());
    }

    #[test]
    fn kind_predicates() {
        assert!(Ty::ref_mark(Ty::named("int")).is_ref_mark());
        assert!(Ty::array(Ty::named("int"), Some(5)).is_array());
        assert!(Ty::function(vec![], Ty::named("void")).is_function());
        assert!(!Ty::named("int").is_ref_mark());
        assert!(!Ty::pointer(Ty::named("int")).is_array());
    }

    #[test]
    fn strip_quals_is_top_level_only() {
        let inner = Ty::named("int").with_quals(Qualifiers::CONST);
        let outer = Ty::pointer(inner.clone()).with_quals(Qualifiers::VOLATILE);
        let stripped = outer.strip_quals();
        assert!(stripped.quals.is_empty());
        assert_eq!(stripped.kind, TyKind::Pointer(Box::new(inner)));
    }

    #[test]
    fn params_are_plain_value_data() {
        let a = Param::lvalue(Ty::named("int"));
        let b = Param::new(Binding::Lvalue, Ty::named("int"));
        assert_eq!(a, b);
        assert_ne!(a, Param::direct(Ty::named("int")));
    }
}
