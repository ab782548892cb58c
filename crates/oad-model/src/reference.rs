//! `$ref` objects and values that may be given either inline or by reference.

use serde::{Deserialize, Serialize};

/// A reference to a component, e.g. `#/components/schemas/Pet`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Reference {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            summary: None,
            description: None,
        }
    }
}

/// Either a [`Reference`] or an inline `T`.
///
/// Deserialization tries the reference shape first, so any object carrying
/// `$ref` is treated as a reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Referenceable<T> {
    Reference(Reference),
    Item(T),
}

impl<T> Referenceable<T> {
    /// The inline value, if this is not a reference.
    pub fn item(&self) -> Option<&T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Reference(_) => None,
        }
    }
}
