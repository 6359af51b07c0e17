// All-or-nothing file output for rendered documents

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::VisualizeError;

/// Write `document` to `path` through a temp file in the same directory.
/// The target only appears once the whole document is flushed; on any error
/// the temp file is removed and the target is left untouched.
pub fn write_document(path: &Path, document: &str) -> Result<(), VisualizeError> {
    let sink_error = |source: std::io::Error| VisualizeError::Sink {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(sink_error)?;
    file.write_all(document.as_bytes()).map_err(sink_error)?;
    file.flush().map_err(sink_error)?;
    file.persist(path).map_err(|e| sink_error(e.error))?;

    info!(path = %path.display(), bytes = document.len(), "graph document written");
    Ok(())
}
