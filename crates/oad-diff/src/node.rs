//! The diff tree.
//!
//! A [`DiffNode`] pairs an optional context label (assigned by whoever
//! performed the comparison) with a [`DiffKind`]. Composite comparisons are
//! aggregated through [`DiffNode::build`], which is the only place a subtree
//! with no differences collapses to [`DiffKind::Same`] and the only place
//! sibling order is fixed.
//!
//! # Ordering
//!
//! Nodes order by ascending severity:
//! `Same < Removed < Added < UpdatedText/UpdatedLines < Changed`.
//! Two `Changed` nodes compare their children lexicographically. Remaining
//! ties break on context, with an absent context first.

use std::cmp::Ordering;

/// What kind of difference a node describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffKind {
    /// No difference.
    Same,
    /// Present only in the "before" value.
    Removed,
    /// Present only in the "after" value.
    Added,
    /// A scalar leaf changed.
    UpdatedText { from: String, to: String },
    /// A multi-line leaf changed; carries an annotated line patch.
    UpdatedLines(String),
    /// A composite value whose member-wise comparisons are the children.
    Changed(Vec<DiffNode>),
}

impl DiffKind {
    fn severity(&self) -> u8 {
        match self {
            Self::Same => 0,
            Self::Removed => 1,
            Self::Added => 2,
            Self::UpdatedText { .. } | Self::UpdatedLines(_) => 3,
            Self::Changed(_) => 4,
        }
    }

    /// Orders kinds of equal severity by their payload so that `Ord` agrees
    /// with `Eq`.
    fn payload_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Self::UpdatedText { from: f1, to: t1 },
                Self::UpdatedText { from: f2, to: t2 },
            ) => f1.cmp(f2).then_with(|| t1.cmp(t2)),
            (Self::UpdatedLines(a), Self::UpdatedLines(b)) => a.cmp(b),
            (Self::UpdatedText { .. }, Self::UpdatedLines(_)) => Ordering::Less,
            (Self::UpdatedLines(_), Self::UpdatedText { .. }) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    }
}

/// A node in the diff tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffNode {
    /// Human-readable label naming what this node represents.
    pub context: Option<String>,
    pub kind: DiffKind,
}

impl DiffNode {
    pub fn new(context: Option<&str>, kind: DiffKind) -> Self {
        Self {
            context: context.map(str::to_owned),
            kind,
        }
    }

    pub fn same(context: Option<&str>) -> Self {
        Self::new(context, DiffKind::Same)
    }

    pub fn added(context: Option<&str>) -> Self {
        Self::new(context, DiffKind::Added)
    }

    pub fn removed(context: Option<&str>) -> Self {
        Self::new(context, DiffKind::Removed)
    }

    pub fn updated(context: Option<&str>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(
            context,
            DiffKind::UpdatedText {
                from: from.into(),
                to: to.into(),
            },
        )
    }

    pub fn lines(context: Option<&str>, patch: impl Into<String>) -> Self {
        Self::new(context, DiffKind::UpdatedLines(patch.into()))
    }

    /// Aggregate member-wise comparisons into one node.
    ///
    /// If every child is `Same` (or there are none) the result is `Same`.
    /// Otherwise the result is `Changed` with the children sorted. `Same`
    /// children are kept so renderers can choose to show them.
    pub fn build(context: Option<&str>, children: impl IntoIterator<Item = DiffNode>) -> Self {
        let mut children: Vec<DiffNode> = children.into_iter().collect();
        if children.iter().all(DiffNode::is_same) {
            return Self::same(context);
        }
        children.sort();
        Self::new(context, DiffKind::Changed(children))
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn is_same(&self) -> bool {
        matches!(self.kind, DiffKind::Same)
    }

    /// Child nodes; empty for anything but `Changed`.
    pub fn children(&self) -> &[DiffNode] {
        match &self.kind {
            DiffKind::Changed(children) => children,
            _ => &[],
        }
    }
}

impl Ord for DiffNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .severity()
            .cmp(&other.kind.severity())
            .then_with(|| match (&self.kind, &other.kind) {
                (DiffKind::Changed(a), DiffKind::Changed(b)) => a.cmp(b),
                _ => Ordering::Equal,
            })
            .then_with(|| self.context.cmp(&other.context))
            .then_with(|| self.kind.payload_cmp(&other.kind))
    }
}

impl PartialOrd for DiffNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
