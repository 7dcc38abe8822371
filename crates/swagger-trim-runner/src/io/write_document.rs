use super::DocumentIoError;
use std::fs;
use std::path::Path;
use swagger_trim_sdk::{render_swagger_document, SwaggerDocument};
use tracing::debug;

/// Renders the whole document before touching `path`, so an encode failure
/// never leaves a partial file behind.
pub fn write_swagger_document(
    path: &Path,
    document: &SwaggerDocument,
) -> Result<usize, DocumentIoError> {
    let rendered = render_swagger_document(document)?;
    fs::write(path, rendered.as_bytes()).map_err(|source| DocumentIoError::OutputWrite {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), bytes = rendered.len(), "wrote output document");
    Ok(rendered.len())
}
