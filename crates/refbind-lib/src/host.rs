//! Seam for the host's generic type-argument inference.
//!
//! The host capability that turns an element-type list into a concrete
//! container type is consumed, never implemented, here. Routing a container
//! factory through this seam is what makes marker unwrapping come for free:
//! the host sees already-normalized element types and needs no
//! marker-specific inference rules of its own.

use refbind_core::{Param, Storage};

use crate::factory::element_types;

/// Host type-inference capability.
///
/// Given an ordered element-type list, produces a fully parameterized
/// container type (or whatever artifact the host derives from one).
pub trait Instantiate {
    type Output;

    fn instantiate(&self, elements: Vec<Storage>) -> Self::Output;
}

/// Normalize `params` and hand the element-type list to the host.
pub fn instantiate_with<I: Instantiate>(host: &I, params: &[Param]) -> I::Output {
    host.instantiate(element_types(params))
}

#[cfg(test)]
mod tests {
    use refbind_core::{Param, Ty};

    use super::*;

    /// Host double that records what it was given and renders a flat
    /// container spelling from it.
    struct RecordingHost;

    impl Instantiate for RecordingHost {
        type Output = (usize, String);

        fn instantiate(&self, elements: Vec<Storage>) -> Self::Output {
            let rendered = elements
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            (elements.len(), format!("tuple<{rendered}>"))
        }
    }

    #[test]
    fn host_receives_normalized_elements() {
        let params = vec![
            Param::direct(Ty::named("int")),
            Param::direct(Ty::ref_mark(Ty::named("double"))),
        ];
        let (arity, rendered) = instantiate_with(&RecordingHost, &params);
        assert_eq!(arity, 2);
        assert_eq!(rendered, "tuple<value int, alias double>");
    }

    #[test]
    fn host_sees_the_same_list_the_factory_produces() {
        struct Echo;
        impl Instantiate for Echo {
            type Output = Vec<Storage>;
            fn instantiate(&self, elements: Vec<Storage>) -> Self::Output {
                elements
            }
        }

        let params = vec![
            Param::rvalue(Ty::named("int")),
            Param::lvalue(Ty::ref_mark(Ty::named("char"))),
        ];
        assert_eq!(instantiate_with(&Echo, &params), element_types(&params));
    }
}
