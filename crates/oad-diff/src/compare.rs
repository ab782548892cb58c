//! Comparison dispatch.
//!
//! Every comparable type produces a [`DiffNode`] labelled with the context
//! its caller supplies. Scalars, optionals, positional sequences, keyed maps
//! and the reference-or-inline union are covered here; per-entity field
//! lists live in [`crate::openapi`].

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use indexmap::IndexMap;
use oad_model::{Reference, Referenceable};
use url::Url;

use crate::context::{ordinal, ApiContext, Identifiable};
use crate::node::DiffNode;

/// A type that can be compared against another value of the same type.
pub trait ApiComparable {
    /// Compare `self` ("before") to `other` ("after") under `context`.
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode;
}

/// Compare two textual representations of a scalar.
pub fn compare_text(before: &str, after: &str, context: Option<&str>) -> DiffNode {
    if before == after {
        DiffNode::same(context)
    } else {
        DiffNode::updated(context, before, after)
    }
}

macro_rules! scalar_comparable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ApiComparable for $ty {
                fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
                    if self == other {
                        DiffNode::same(context)
                    } else {
                        DiffNode::updated(context, self.to_string(), other.to_string())
                    }
                }
            }
        )*
    };
}

scalar_comparable!(String, bool, i64, u64, Url);

/// Floats compare by value, with every NaN equal to every other NaN.
impl ApiComparable for f64 {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        if self == other || (self.is_nan() && other.is_nan()) {
            DiffNode::same(context)
        } else {
            DiffNode::updated(context, self.to_string(), other.to_string())
        }
    }
}

impl<T: ApiComparable> ApiComparable for Option<T> {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        match (self, other) {
            (None, None) => DiffNode::same(context),
            (Some(before), Some(after)) => before.compare(after, context),
            (None, Some(_)) => DiffNode::added(context),
            (Some(_), None) => DiffNode::removed(context),
        }
    }
}

/// Describe an element, falling back to its position when it has no
/// description of its own.
fn describe<T: ApiContext>(element: &T, offset: usize) -> String {
    let description = element.api_context();
    if description.is_empty() {
        format!("{} item", ordinal(offset))
    } else {
        description
    }
}

/// Positional comparison for sequences whose elements have no identity.
///
/// Element `i` is compared to element `i`; surplus elements are added or
/// removed.
impl<T: ApiComparable + ApiContext> ApiComparable for Vec<T> {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        let mut changes = Vec::with_capacity(self.len().max(other.len()));

        for (offset, before) in self.iter().enumerate() {
            let description = before.api_context();
            match other.get(offset) {
                Some(after) => {
                    let label = if description.is_empty() {
                        format!("{} item", ordinal(offset))
                    } else {
                        format!("{} item - {}", ordinal(offset), description)
                    };
                    changes.push(before.compare(after, Some(&label)));
                }
                None => changes.push(DiffNode::removed(Some(&describe(before, offset)))),
            }
        }

        for (offset, after) in other.iter().enumerate().skip(self.len()) {
            changes.push(DiffNode::added(Some(&describe(after, offset))));
        }

        DiffNode::build(context, changes)
    }
}

/// Identity-matched comparison for collections of [`Identifiable`] elements.
///
/// Each "before" element is compared with the first "after" element of
/// equal identity, so inserting or removing an element never shifts the
/// comparison of its neighbours.
pub fn compare_identified<T>(before: &[T], after: &[T], context: Option<&str>) -> DiffNode
where
    T: ApiComparable + ApiContext + Identifiable,
{
    let mut by_identity: HashMap<String, &T> = HashMap::with_capacity(after.len());
    for element in after {
        by_identity.entry(element.identity()).or_insert(element);
    }
    let before_identities: HashSet<String> = before.iter().map(Identifiable::identity).collect();

    let mut changes = Vec::with_capacity(before.len().max(after.len()));

    for (offset, element) in before.iter().enumerate() {
        let description = describe(element, offset);
        match by_identity.get(&element.identity()) {
            Some(matched) => changes.push(element.compare(matched, Some(&description))),
            None => changes.push(DiffNode::removed(Some(&description))),
        }
    }

    for (offset, element) in after.iter().enumerate() {
        if !before_identities.contains(&element.identity()) {
            changes.push(DiffNode::added(Some(&describe(element, offset))));
        }
    }

    DiffNode::build(context, changes)
}

/// Key-value comparison. Keys are labelled by their own context.
impl<K, V> ApiComparable for IndexMap<K, V>
where
    K: ApiContext + Hash + Eq,
    V: ApiComparable,
{
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        let mut changes = Vec::with_capacity(self.len().max(other.len()));

        for (key, before) in self {
            let label = key.api_context();
            match other.get(key) {
                Some(after) => changes.push(before.compare(after, Some(&label))),
                None => changes.push(DiffNode::removed(Some(&label))),
            }
        }

        for key in other.keys() {
            if !self.contains_key(key) {
                changes.push(DiffNode::added(Some(&key.api_context())));
            }
        }

        DiffNode::build(context, changes)
    }
}

impl ApiComparable for Reference {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        DiffNode::build(
            context,
            [
                self.target.compare(&other.target, Some("reference")),
                self.summary.compare(&other.summary, Some("summary")),
                self.description.compare(&other.description, Some("description")),
            ],
        )
    }
}

impl ApiContext for Reference {
    fn api_context(&self) -> String {
        self.target.clone()
    }
}

impl Identifiable for Reference {
    fn identity(&self) -> String {
        self.target.clone()
    }
}

/// Describes which of the two shapes a [`Referenceable`] holds.
fn shape_description<T: ApiContext>(value: &Referenceable<T>) -> String {
    match value {
        Referenceable::Reference(reference) => format!("the reference {}", reference.target),
        Referenceable::Item(item) => {
            let description = item.api_context();
            if description.is_empty() {
                "an inline value".to_string()
            } else {
                format!("the inline value {description}")
            }
        }
    }
}

/// Same-shape pairs recurse; a reference replaced by an inline value (or the
/// reverse) is reported as a single shape-level update.
impl<T: ApiComparable + ApiContext> ApiComparable for Referenceable<T> {
    fn compare(&self, other: &Self, context: Option<&str>) -> DiffNode {
        match (self, other) {
            (Referenceable::Reference(before), Referenceable::Reference(after)) => {
                before.compare(after, context)
            }
            (Referenceable::Item(before), Referenceable::Item(after)) => {
                before.compare(after, context)
            }
            (before, after) => {
                DiffNode::updated(context, shape_description(before), shape_description(after))
            }
        }
    }
}

impl<T: ApiContext> ApiContext for Referenceable<T> {
    fn api_context(&self) -> String {
        match self {
            Referenceable::Reference(reference) => reference.api_context(),
            Referenceable::Item(item) => item.api_context(),
        }
    }
}

impl<T: Identifiable> Identifiable for Referenceable<T> {
    fn identity(&self) -> String {
        match self {
            Referenceable::Reference(reference) => reference.identity(),
            Referenceable::Item(item) => item.identity(),
        }
    }
}
