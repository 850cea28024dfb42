//! Deserialization layer: 1:1 mapping to the descriptor JSON format.
//!
//! This layer is permissive: the classification fields are independent
//! options, so a JSON document can claim several at once or none at all.
//! Conversion to the checked model is where such documents are rejected.
//! The checked model itself cannot represent them.

use crate::ty::{Binding, Param, Qualifiers, Ty, TyKind};

/// Errors produced when converting raw descriptors to the checked model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// More than one classification field present on one node.
    #[error("descriptor claims multiple classifications: `{first}` and `{second}`")]
    AmbiguousKind {
        first: &'static str,
        second: &'static str,
    },

    /// No classification field present.
    #[error(
        "descriptor has no classification: expected one of `type`, `ref_mark`, `array`, `function`, `pointer`"
    )]
    MissingKind,

    /// `binding` on a nested type position. Binding modes only exist on
    /// top-level arguments.
    #[error("`binding` is only valid on a top-level argument")]
    NestedBinding,

    /// Arrays must have a nonzero extent when one is given.
    #[error("array extent must be nonzero")]
    EmptyArray,

    #[error("invalid descriptor JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw type node as written in descriptor JSON.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawType {
    /// Reference-binding mode; only meaningful on a top-level argument.
    #[serde(default)]
    pub binding: Option<RawBinding>,

    #[serde(default, rename = "const")]
    pub is_const: bool,
    #[serde(default, rename = "volatile")]
    pub is_volatile: bool,

    /// Named base type.
    #[serde(default, rename = "type")]
    pub name: Option<String>,
    /// Reference-marker wrapper payload.
    #[serde(default)]
    pub ref_mark: Option<Box<RawType>>,
    #[serde(default)]
    pub array: Option<RawArray>,
    #[serde(default)]
    pub function: Option<RawFunction>,
    #[serde(default)]
    pub pointer: Option<Box<RawType>>,
}

/// Raw binding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawBinding {
    Direct,
    Lvalue,
    Rvalue,
}

impl From<RawBinding> for Binding {
    fn from(raw: RawBinding) -> Self {
        match raw {
            RawBinding::Direct => Binding::Direct,
            RawBinding::Lvalue => Binding::Lvalue,
            RawBinding::Rvalue => Binding::Rvalue,
        }
    }
}

/// Raw array node.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawArray {
    pub element: Box<RawType>,
    #[serde(default)]
    pub len: Option<u64>,
}

/// Raw function node.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFunction {
    #[serde(default)]
    pub params: Vec<RawType>,
    pub ret: Box<RawType>,
}

impl RawType {
    /// Names of the classification fields present on this node, in the order
    /// the normalizer checks them.
    fn present_kinds(&self) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        if self.ref_mark.is_some() {
            kinds.push("ref_mark");
        }
        if self.array.is_some() {
            kinds.push("array");
        }
        if self.function.is_some() {
            kinds.push("function");
        }
        if self.pointer.is_some() {
            kinds.push("pointer");
        }
        if self.name.is_some() {
            kinds.push("type");
        }
        kinds
    }

    /// Convert a top-level argument descriptor to the checked model.
    pub fn build_param(&self) -> Result<Param, ModelError> {
        let binding = self.binding.map_or(Binding::Direct, Binding::from);
        Ok(Param::new(binding, self.build_ty(true)?))
    }

    /// Convert a type node to the checked model. Rejects `binding` unless
    /// `top` is set.
    fn build_ty(&self, top: bool) -> Result<Ty, ModelError> {
        if !top && self.binding.is_some() {
            return Err(ModelError::NestedBinding);
        }

        let kinds = self.present_kinds();
        match kinds.as_slice() {
            [] => return Err(ModelError::MissingKind),
            [_] => {}
            [first, second, ..] => {
                return Err(ModelError::AmbiguousKind {
                    first: *first,
                    second: *second,
                });
            }
        }

        let kind = if let Some(payload) = &self.ref_mark {
            TyKind::RefMark(Box::new(payload.build_ty(false)?))
        } else if let Some(array) = &self.array {
            if array.len == Some(0) {
                return Err(ModelError::EmptyArray);
            }
            TyKind::Array {
                element: Box::new(array.element.build_ty(false)?),
                len: array.len,
            }
        } else if let Some(function) = &self.function {
            TyKind::Function {
                params: function
                    .params
                    .iter()
                    .map(|p| p.build_ty(false))
                    .collect::<Result<_, _>>()?,
                ret: Box::new(function.ret.build_ty(false)?),
            }
        } else if let Some(pointee) = &self.pointer {
            TyKind::Pointer(Box::new(pointee.build_ty(false)?))
        } else {
            // present_kinds() left exactly one candidate, so `name` is it.
            TyKind::Named(self.name.clone().unwrap_or_default())
        };

        Ok(Ty::new(
            Qualifiers::new(self.is_const, self.is_volatile),
            kind,
        ))
    }
}

/// Parse a single argument descriptor from JSON.
pub fn parse_param(json: &str) -> Result<Param, ModelError> {
    let raw: RawType = serde_json::from_str(json)?;
    raw.build_param()
}

/// Parse an ordered argument list (JSON array of descriptors).
pub fn parse_params(json: &str) -> Result<Vec<Param>, ModelError> {
    let raw: Vec<RawType> = serde_json::from_str(json)?;
    raw.iter().map(RawType::build_param).collect()
}
