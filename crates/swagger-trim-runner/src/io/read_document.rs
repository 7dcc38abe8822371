use super::DocumentIoError;
use std::fs;
use std::path::Path;
use swagger_trim_sdk::{
    parse_swagger_document_with_options, DocumentFormat, ParseDocumentOptions, SwaggerDocument,
};
use tracing::debug;

pub fn read_swagger_document(
    path: &Path,
    format: DocumentFormat,
) -> Result<SwaggerDocument, DocumentIoError> {
    let text = fs::read_to_string(path).map_err(|source| DocumentIoError::InputRead {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read input document");

    parse_swagger_document_with_options(
        text.as_str(),
        ParseDocumentOptions {
            format: resolve_format(path, format),
        },
    )
    .map_err(|issues| DocumentIoError::Deserialization {
        path: path.display().to_string(),
        issues,
    })
}

fn resolve_format(path: &Path, format: DocumentFormat) -> DocumentFormat {
    if format != DocumentFormat::Auto {
        return format;
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => DocumentFormat::Json,
        Some("yaml") | Some("yml") => DocumentFormat::Yaml,
        _ => DocumentFormat::Auto,
    }
}

#[cfg(test)]
#[path = "read_document_test.rs"]
mod tests;
