//! Renderers that turn a [`DiffNode`] tree into human output.
//!
//! Every renderer takes a filter predicate that is applied to children only;
//! the node passed in is always rendered.

pub mod markdown;
pub mod stats;
pub mod tree;

use serde::{Deserialize, Serialize};

use crate::node::DiffNode;
use crate::openapi::SCHEMA_LABEL;

pub use stats::DiffStats;

/// Depth at which single-child chains start collapsing in markdown output.
pub const DEFAULT_FLATTEN_DEPTH: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Nested text with `| ` indentation.
    #[default]
    Plaintext,
    /// Headered markdown sections.
    Markdown,
    /// Addition, removal, and change counts.
    Stats,
}

/// How a diff tree is rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub style: OutputStyle,
    pub flatten_depth: usize,
    /// Hide differences reported under the schema label.
    pub skip_schemas: bool,
    /// Render `Same` children instead of hiding them.
    pub show_unchanged: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: OutputStyle::Plaintext,
            flatten_depth: DEFAULT_FLATTEN_DEPTH,
            skip_schemas: false,
            show_unchanged: false,
        }
    }
}

impl RenderOptions {
    /// The child filter these options describe.
    pub fn filter(&self) -> impl Fn(&DiffNode) -> bool + '_ {
        move |node: &DiffNode| {
            (self.show_unchanged || !node.is_same())
                && !(self.skip_schemas && node.context() == Some(SCHEMA_LABEL))
        }
    }
}

/// Render `node` in the configured style.
pub fn render(node: &DiffNode, options: &RenderOptions) -> String {
    let filter = options.filter();
    match options.style {
        OutputStyle::Plaintext => tree::render(node, &filter),
        OutputStyle::Markdown => markdown::render(node, &filter, options.flatten_depth),
        OutputStyle::Stats => DiffStats::collect(node, &filter).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DiffNode {
        DiffNode::build(
            Some("Pet Store"),
            [
                DiffNode::same(Some("servers")),
                DiffNode::build(
                    Some("Pet"),
                    [
                        DiffNode::lines(Some(SCHEMA_LABEL), "+ tag"),
                        DiffNode::updated(Some("description"), "a", "b"),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn default_filter_hides_unchanged() {
        let out = render(&sample(), &RenderOptions::default());
        assert!(!out.contains("servers"));
        assert!(out.contains("Updated description from 'a' to 'b'"));
        assert!(out.contains("+ tag"));
    }

    #[test]
    fn show_unchanged() {
        let options = RenderOptions {
            show_unchanged: true,
            ..Default::default()
        };
        assert!(render(&sample(), &options).contains("No Difference to servers"));
    }

    #[test]
    fn skip_schemas() {
        let options = RenderOptions {
            skip_schemas: true,
            ..Default::default()
        };
        let out = render(&sample(), &options);
        assert!(!out.contains("+ tag"));
        assert!(out.contains("Updated description"));
    }

    #[test]
    fn stats_style() {
        let options = RenderOptions {
            style: OutputStyle::Stats,
            ..Default::default()
        };
        assert_eq!(
            render(&sample(), &options),
            "Additions: 0\nRemovals: 0\nChanges: 2"
        );
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"style":"markdown","skip_schemas":true}"#).unwrap();
        assert_eq!(options.style, OutputStyle::Markdown);
        assert!(options.skip_schemas);
        assert_eq!(options.flatten_depth, DEFAULT_FLATTEN_DEPTH);
    }
}
