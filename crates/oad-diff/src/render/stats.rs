//! Summary counts over a diff tree.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::node::{DiffKind, DiffNode};

/// Number of additions, removals, and leaf changes in a diff tree.
///
/// `Changed` nodes only contribute the counts of their children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub removals: usize,
    pub changes: usize,
}

impl DiffStats {
    /// Count over `node` and every descendant accepted by `filter`.
    pub fn collect<F>(node: &DiffNode, filter: &F) -> Self
    where
        F: Fn(&DiffNode) -> bool,
    {
        Self {
            additions: count(node, filter, &|kind: &DiffKind| matches!(kind, DiffKind::Added)),
            removals: count(node, filter, &|kind: &DiffKind| matches!(kind, DiffKind::Removed)),
            changes: count(node, filter, &|kind: &DiffKind| {
                matches!(kind, DiffKind::UpdatedText { .. } | DiffKind::UpdatedLines(_))
            }),
        }
    }

    /// Count over the whole tree.
    pub fn of(node: &DiffNode) -> Self {
        Self::collect(node, &|_: &DiffNode| true)
    }

    pub fn total(&self) -> usize {
        self.additions + self.removals + self.changes
    }

    /// Returns `true` if nothing was added, removed, or changed.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

fn count<F, P>(node: &DiffNode, filter: &F, counted: &P) -> usize
where
    F: Fn(&DiffNode) -> bool,
    P: Fn(&DiffKind) -> bool,
{
    match &node.kind {
        DiffKind::Changed(children) => children
            .iter()
            .filter(|c| filter(*c))
            .map(|c| count(c, filter, counted))
            .sum(),
        kind => usize::from(counted(kind)),
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Additions: {}\nRemovals: {}\nChanges: {}",
            self.additions, self.removals, self.changes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ignore_nesting_depth() {
        let tree = DiffNode::build(
            Some("root"),
            [DiffNode::build(
                Some("paths"),
                [
                    DiffNode::added(Some("a")),
                    DiffNode::removed(Some("b")),
                    DiffNode::updated(Some("c"), "1", "2"),
                    DiffNode::same(Some("d")),
                ],
            )],
        );
        assert_eq!(
            DiffStats::of(&tree),
            DiffStats {
                additions: 1,
                removals: 1,
                changes: 1
            }
        );
    }

    #[test]
    fn line_updates_are_changes() {
        let tree = DiffNode::build(None, [DiffNode::lines(Some("schema"), "+ x")]);
        assert_eq!(DiffStats::of(&tree).changes, 1);
    }

    #[test]
    fn same_counts_nothing() {
        let stats = DiffStats::of(&DiffNode::same(None));
        assert!(stats.is_empty());
    }

    #[test]
    fn filtered_children_are_not_counted() {
        let tree = DiffNode::build(
            None,
            [DiffNode::added(Some("keep")), DiffNode::added(Some("drop"))],
        );
        let stats = DiffStats::collect(&tree, &|n: &DiffNode| n.context() != Some("drop"));
        assert_eq!(stats.additions, 1);
    }

    #[test]
    fn display() {
        let stats = DiffStats {
            additions: 2,
            removals: 0,
            changes: 5,
        };
        assert_eq!(stats.to_string(), "Additions: 2\nRemovals: 0\nChanges: 5");
    }
}
