//! Markdown rendering.
//!
//! Nesting becomes header depth. Past the flatten depth, chains of
//! `Changed` nodes with a single visible child are folded into one section
//! whose context joins the chain with arrows, so deeply nested documents do
//! not produce a wall of one-line headers.

use crate::node::{DiffKind, DiffNode};

const CONTEXT_SEPARATOR: &str = " → ";

/// Markdown has six header levels; deeper sections reuse the last one.
const MAX_HEADER_DEPTH: usize = 6;

/// Render `node` as markdown sections, flattening single-child chains once
/// recursion reaches `flatten_depth` (the root is depth 1).
pub fn render<F>(node: &DiffNode, filter: &F, flatten_depth: usize) -> String
where
    F: Fn(&DiffNode) -> bool,
{
    let mut sections = Vec::new();
    render_section(node, filter, flatten_depth, 1, &mut sections);
    sections.join("\n\n")
}

fn render_section<F>(
    node: &DiffNode,
    filter: &F,
    flatten_depth: usize,
    depth: usize,
    sections: &mut Vec<String>,
) where
    F: Fn(&DiffNode) -> bool,
{
    let header = "#".repeat(depth.min(MAX_HEADER_DEPTH));
    let mut context = node.context.clone();
    let mut current = node;

    if depth >= flatten_depth {
        while let DiffKind::Changed(children) = &current.kind {
            let mut visible = children.iter().filter(|c| filter(*c));
            match (visible.next(), visible.next()) {
                (None, _) => {
                    sections.push(format!(
                        "{header} Changed at {}",
                        context.unwrap_or_default()
                    ));
                    return;
                }
                (Some(only), None) => {
                    context = join_context(context, only.context());
                    current = only;
                }
                (Some(_), Some(_)) => break,
            }
        }
    }

    let context = context.map(|c| format!(" {c}")).unwrap_or_default();
    match &current.kind {
        DiffKind::Same => sections.push(format!("{header} No Difference to{context}")),
        DiffKind::Added => sections.push(format!("{header} Added{context}")),
        DiffKind::Removed => sections.push(format!("{header} Removed{context}")),
        DiffKind::UpdatedText { from, to } => sections.push(format!(
            "{header} Updated{context}\n\nfrom:\n{}\n\nto:\n{}",
            quote(from),
            quote(to)
        )),
        DiffKind::UpdatedLines(patch) => sections.push(format!(
            "{header} Changed{context}\n\n```diff\n{patch}\n```"
        )),
        DiffKind::Changed(children) => {
            sections.push(format!("{header} Changed{context}"));
            for child in children.iter().filter(|c| filter(*c)) {
                render_section(child, filter, flatten_depth, depth + 1, sections);
            }
        }
    }
}

fn join_context(parent: Option<String>, child: Option<&str>) -> Option<String> {
    match (parent, child) {
        (Some(parent), Some(child)) => Some(format!("{parent}{CONTEXT_SEPARATOR}{child}")),
        (Some(parent), None) => Some(parent),
        (None, child) => child.map(str::to_owned),
    }
}

fn quote(text: &str) -> String {
    if text.is_empty() {
        return ">".to_string();
    }
    text.lines()
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
