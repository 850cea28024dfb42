//! refbind: storage-type normalization for inference-built containers.
//!
//! A generic pair/tuple-like container whose type parameters come from
//! automatic inference stores plain arguments by value, following decay
//! semantics. Wrapping an argument's type in the explicit reference marker
//! is the one signal that the container should store a mutable alias to the
//! referent instead.
//!
//! # Example
//!
//! ```
//! use refbind_lib::{Param, Storage, Ty, normalize};
//!
//! let plain = Param::lvalue(Ty::named("int"));
//! assert_eq!(normalize(&plain), Storage::Value(Ty::named("int")));
//!
//! let marked = Param::direct(Ty::ref_mark(Ty::named("int")));
//! assert_eq!(normalize(&marked), Storage::Alias(Ty::named("int")));
//! ```

mod factory;
mod host;
mod normalize;

#[cfg(test)]
mod factory_tests;

pub use factory::{Element, Forward, construction_plan, element_types};
pub use host::{Instantiate, instantiate_with};
pub use normalize::normalize;

pub use refbind_core::{
    Binding, ModelError, Param, Qualifiers, Storage, Ty, TyKind, parse_param, parse_params,
};
