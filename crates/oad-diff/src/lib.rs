//! Structural diff engine for openapi-diff.
//!
//! Compares two typed documents and produces a [`DiffNode`] tree, which can
//! then be rendered as nested plaintext, flattened markdown, or summary
//! statistics.
//!
//! # Key Types
//!
//! - [`DiffNode`] / [`DiffKind`] -- The recursive diff tree and its canonical ordering
//! - [`ApiComparable`] -- Per-type comparison producing a [`DiffNode`]
//! - [`ApiContext`] / [`Identifiable`] -- Context labels and identity keys for collection elements
//! - [`diff_text`] -- Line-level diff for large text leaves
//! - [`RenderOptions`] / [`DiffStats`] -- Rendering configuration and summary counts

pub mod compare;
pub mod context;
pub mod line_diff;
pub mod node;
pub mod openapi;
pub mod render;

pub use compare::{compare_identified, compare_text, ApiComparable};
pub use context::{ordinal, ApiContext, Identifiable};
pub use line_diff::diff_text;
pub use node::{DiffKind, DiffNode};
pub use openapi::{diff_documents, SCHEMA_LABEL};
pub use render::{render, DiffStats, OutputStyle, RenderOptions};
