//! Storage-type normalization.
//!
//! Maps a declared argument to the type a generic container should hold for
//! it. Plain arguments follow decay semantics (a copy behaves like an
//! ordinary by-value parameter); a reference-marker wrapper is the sole
//! signal that the element is stored as a mutable alias instead.

use refbind_core::{Param, Storage, Ty, TyKind};

/// Compute the storage type for one declared argument.
///
/// Total and pure: every checked-model [`Param`] maps to exactly one
/// [`Storage`]. The binding mode is dropped up front, and classification
/// runs on the residual type in priority order:
///
/// 1. Reference marker: `alias` of the payload, whatever the qualifiers and
///    binding mode were. One level only; a nested marker stays nested.
/// 2. Array: decays to a pointer to the element type. Qualifiers written on
///    the array position apply to the elements, so they merge into the
///    pointee. The extent is discarded.
/// 3. Function: decays to a pointer to the function type.
/// 4. Anything else is stored by value with its top-level qualifiers
///    stripped.
///
/// The marker check runs before any qualifier handling. A qualify-then-
/// classify pipeline would misfile a read-only or temporary-bound marker as
/// a by-value wrapper copy.
pub fn normalize(param: &Param) -> Storage {
    let u = &param.ty;
    match &u.kind {
        TyKind::RefMark(payload) => Storage::Alias((**payload).clone()),
        TyKind::Array { element, .. } => {
            let quals = element.quals.union(u.quals);
            let pointee = (**element).clone().with_quals(quals);
            Storage::Value(Ty::pointer(pointee))
        }
        TyKind::Function { .. } => Storage::Value(Ty::pointer(u.clone().strip_quals())),
        TyKind::Named(_) | TyKind::Pointer(_) => Storage::Value(u.clone().strip_quals()),
    }
}
