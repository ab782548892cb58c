//! Line-level diff for large text leaves.
//!
//! Uses the `similar` crate's LCS algorithm to annotate every line of the
//! "before" text as kept (`  `), removed (`- `), or followed by inserted
//! lines (`+ `). Long runs of kept lines are elided.

use similar::{Algorithm, ChangeTag, TextDiff};
use tracing::debug;

use crate::node::DiffNode;

/// Minimum run of unchanged lines that gets elided.
pub const ELISION_THRESHOLD: usize = 5;

/// Replaces an elided run of unchanged lines.
pub const ELISION_MARKER: &str = "  [...]";

const UNCHANGED: &str = "  ";
const REMOVED: &str = "- ";
const INSERTED: &str = "+ ";

/// Diff two text blocks line by line.
///
/// Text with equal lines yields `Same`, so line endings and a trailing
/// newline are not differences. Anything else yields `UpdatedLines` with the
/// annotated patch.
pub fn diff_text(before: &str, after: &str, context: Option<&str>) -> DiffNode {
    if before == after || before.lines().eq(after.lines()) {
        return DiffNode::same(context);
    }
    DiffNode::lines(context, interleave(before, after))
}

/// Render the annotated patch between two text blocks, with elision.
pub fn interleave(before: &str, after: &str) -> String {
    let annotated = annotate(before, after);
    let total = annotated.len();
    let elided = elide_unchanged(annotated);
    debug!(
        lines = total,
        rendered = elided.len(),
        "computed line diff"
    );
    elided.join("\n")
}

fn annotate(before: &str, after: &str) -> Vec<String> {
    let old: Vec<&str> = before.lines().collect();
    let new: Vec<&str> = after.lines().collect();

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Lcs)
        .diff_slices(&old, &new);

    diff.iter_all_changes()
        .map(|change| {
            let marker = match change.tag() {
                ChangeTag::Equal => UNCHANGED,
                ChangeTag::Delete => REMOVED,
                ChangeTag::Insert => INSERTED,
            };
            format!("{marker}{}", change.value())
        })
        .collect()
}

/// Collapse every run of [`ELISION_THRESHOLD`] or more unchanged lines into
/// a single [`ELISION_MARKER`]. The first line never joins a run.
fn elide_unchanged(lines: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut run = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        if idx > 0 && line.starts_with(UNCHANGED) {
            run.push(line);
            continue;
        }
        flush_run(&mut out, &mut run);
        out.push(line);
    }
    flush_run(&mut out, &mut run);

    out
}

fn flush_run(out: &mut Vec<String>, run: &mut Vec<String>) {
    if run.len() >= ELISION_THRESHOLD {
        out.push(ELISION_MARKER.to_string());
        run.clear();
    } else {
        out.append(run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::DiffKind;
    use proptest::prelude::*;

    /// Rebuild both sides of an unelided patch.
    fn replay(patch: &[String]) -> (Vec<String>, Vec<String>) {
        let mut old = Vec::new();
        let mut new = Vec::new();
        for line in patch {
            if let Some(rest) = line.strip_prefix(UNCHANGED) {
                old.push(rest.to_string());
                new.push(rest.to_string());
            } else if let Some(rest) = line.strip_prefix(REMOVED) {
                old.push(rest.to_string());
            } else if let Some(rest) = line.strip_prefix(INSERTED) {
                new.push(rest.to_string());
            } else {
                panic!("unannotated line {line:?}");
            }
        }
        (old, new)
    }

    #[test]
    fn equal_text_is_same() {
        let text = "type: object\nproperties:\n  id: {}\n";
        assert_eq!(diff_text(text, text, Some("schema")), DiffNode::same(Some("schema")));
    }

    #[test]
    fn line_endings_are_not_differences() {
        assert!(diff_text("a\nb", "a\nb\n", None).is_same());
        assert!(diff_text("a\r\nb\r\n", "a\nb\n", None).is_same());
        assert!(!diff_text("a\nb", "a\nb\n\n", None).is_same());
    }

    #[test]
    fn changed_text_is_updated_lines() {
        let node = diff_text("type: string\n", "type: integer\n", Some("schema"));
        assert_eq!(node.context(), Some("schema"));
        assert_eq!(
            node.kind,
            DiffKind::UpdatedLines("- type: string\n+ type: integer".to_string())
        );
    }

    #[test]
    fn insertion_keeps_surrounding_lines() {
        let patch = interleave("a\nb\nc", "a\nb\nx\nc");
        assert_eq!(patch, "  a\n  b\n+ x\n  c");
    }

    #[test]
    fn removal_is_marked_in_place() {
        let patch = interleave("a\nb\nc", "a\nc");
        assert_eq!(patch, "  a\n- b\n  c");
    }

    #[test]
    fn five_unchanged_lines_are_elided() {
        let patch = interleave("a\n1\n2\n3\n4\n5\nb", "A\n1\n2\n3\n4\n5\nB");
        let lines: Vec<&str> = patch.lines().collect();
        assert_eq!(lines.iter().filter(|l| **l == ELISION_MARKER).count(), 1);
        assert!(!lines.contains(&"  3"));
        assert!(lines.contains(&"- a") && lines.contains(&"+ A"));
        assert!(lines.contains(&"- b") && lines.contains(&"+ B"));
    }

    #[test]
    fn four_unchanged_lines_are_kept() {
        let patch = interleave("a\n1\n2\n3\n4\nb", "A\n1\n2\n3\n4\nB");
        let lines: Vec<&str> = patch.lines().collect();
        assert!(!lines.contains(&ELISION_MARKER));
        for kept in ["  1", "  2", "  3", "  4"] {
            assert!(lines.contains(&kept), "missing {kept}");
        }
    }

    #[test]
    fn leading_unchanged_line_never_joins_a_run() {
        // The first line plus four more would reach the threshold only if
        // the first line counted.
        let patch = interleave("0\n1\n2\n3\n4\nz", "0\n1\n2\n3\n4\nZ");
        assert!(!patch.contains(ELISION_MARKER));
        assert!(patch.starts_with("  0\n"));
    }

    #[test]
    fn trailing_run_is_elided() {
        let patch = interleave("x\n1\n2\n3\n4\n5\n6", "y\n1\n2\n3\n4\n5\n6");
        assert!(patch.ends_with(ELISION_MARKER));
    }

    proptest! {
        #[test]
        fn patch_replays_to_both_sides(
            old in proptest::collection::vec("[abc]", 0..12),
            new in proptest::collection::vec("[abc]", 0..12),
        ) {
            let before = old.join("\n");
            let after = new.join("\n");
            let (replayed_old, replayed_new) = replay(&annotate(&before, &after));
            prop_assert_eq!(replayed_old, old);
            prop_assert_eq!(replayed_new, new);
        }

        #[test]
        fn equal_blocks_are_same(lines in proptest::collection::vec("[a-z ]{0,10}", 0..10)) {
            let text = lines.join("\n");
            prop_assert!(diff_text(&text, &text, None).is_same());
        }
    }
}
