//! Storage classification produced by normalization.

use crate::ty::Ty;

/// What a generic container holds for one element after normalization.
///
/// Either a plain, qualifier-stripped copy, or a mutable alias to the
/// referent carried by a reference marker. There is no temporary-binding
/// variant: aliases always bind as mutable lvalues.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Storage {
    /// Store a fresh copy of the value.
    Value(Ty),
    /// Store a mutable alias to the marker's referent.
    Alias(Ty),
}

impl Storage {
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, Self::Alias(_))
    }

    /// The stored type, ignoring the value/alias distinction.
    pub fn ty(&self) -> &Ty {
        match self {
            Self::Value(ty) | Self::Alias(ty) => ty,
        }
    }

    pub fn into_ty(self) -> Ty {
        match self {
            Self::Value(ty) | Self::Alias(ty) => ty,
        }
    }
}
