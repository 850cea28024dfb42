//! Container element planning.
//!
//! The factory view of normalization: apply [`normalize`] independently to
//! each argument of a variadic construction, preserving order and arity,
//! and record how a runtime constructor would forward each argument into
//! the container.

use refbind_core::{Binding, Param, Storage};

use crate::normalize::normalize;

/// How a constructor forwards one argument into the container.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Forward {
    /// Copy into by-value storage.
    Copy,
    /// Move into by-value storage; only temporary-bound arguments qualify.
    Move,
    /// Bind alias storage to the referent carried by the marker. The marker
    /// itself is discarded after extraction.
    Bind,
}

impl std::fmt::Display for Forward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Forward::Copy => "copy",
            Forward::Move => "move",
            Forward::Bind => "bind",
        };
        f.write_str(s)
    }
}

/// One planned container element: its storage type and forwarding mode.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize)]
pub struct Element {
    pub storage: Storage,
    pub forward: Forward,
}

/// Compute the ordered element-type list for a container constructed from
/// `params`.
///
/// Each argument is normalized independently; there are no cross-argument
/// rules. The output has the same length and order as the input.
pub fn element_types(params: &[Param]) -> Vec<Storage> {
    params.iter().map(normalize).collect()
}

/// Compute the full construction plan: element types plus forwarding modes.
pub fn construction_plan(params: &[Param]) -> Vec<Element> {
    params.iter().map(plan_one).collect()
}

fn plan_one(param: &Param) -> Element {
    let storage = normalize(param);
    let forward = match (&storage, param.binding) {
        (Storage::Alias(_), _) => Forward::Bind,
        (Storage::Value(_), Binding::Rvalue) => Forward::Move,
        (Storage::Value(_), _) => Forward::Copy,
    };
    Element { storage, forward }
}
