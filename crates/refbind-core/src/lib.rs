//! Core data structures for refbind argument-type descriptors.
//!
//! Two layers:
//! - **Deserialization layer** (`raw`): 1:1 mapping to descriptor JSON,
//!   permissive by construction
//! - **Checked layer** (`ty`, `storage`): validated model in which the
//!   mutually exclusive classification branches are a sum type
//!
//! Conversion between the layers is the only fallible step; everything
//! downstream operates on the checked model and stays total.

mod display;
mod raw;
mod storage;
mod ty;

pub use raw::{ModelError, RawArray, RawBinding, RawFunction, RawType, parse_param, parse_params};
pub use storage::Storage;
pub use ty::{Binding, Param, Qualifiers, Ty, TyKind};
