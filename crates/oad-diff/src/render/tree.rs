//! Nested plaintext rendering.

use std::fmt;

use crate::node::{DiffKind, DiffNode};

const INDENT: &str = "| ";

/// Render `node` and every child accepted by `filter` as nested text.
///
/// Each child's lines are prefixed with `| `, so nesting depth shows as the
/// number of bars.
pub fn render<F>(node: &DiffNode, filter: &F) -> String
where
    F: Fn(&DiffNode) -> bool,
{
    let context = node
        .context()
        .map(|c| format!(" {c}"))
        .unwrap_or_default();

    match &node.kind {
        DiffKind::Same => format!("No Difference to{context}"),
        DiffKind::Added => format!("Added{context}"),
        DiffKind::Removed => format!("Removed{context}"),
        DiffKind::UpdatedText { from, to } => format!("Updated{context} from '{from}' to '{to}'"),
        DiffKind::UpdatedLines(patch) => format!("Changed{context}\n{patch}"),
        DiffKind::Changed(children) => {
            let mut out = format!("Changed{context}");
            for child in children.iter().filter(|c| filter(*c)) {
                for line in render(child, filter).lines() {
                    out.push('\n');
                    out.push_str(INDENT);
                    out.push_str(line);
                }
            }
            out
        }
    }
}

/// Renders the full tree, unchanged children included.
impl fmt::Display for DiffNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &|_: &DiffNode| true))
    }
}
