//! Loading documents from disk.

use std::path::Path;

use tracing::debug;

use crate::document::Document;
use crate::error::{LoadError, LoadResult};

/// Read and parse a document.
///
/// Files with a `.json` extension (any case) are parsed as JSON; everything
/// else is parsed as YAML.
pub fn load_document(path: impl AsRef<Path>) -> LoadResult<Document> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = if is_json(path) {
        Document::from_json_str(&text)?
    } else {
        Document::from_yaml_str(&text)?
    };

    debug!(
        path = %path.display(),
        title = %doc.info.title,
        paths = doc.paths.len(),
        "loaded document"
    );
    Ok(doc)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
