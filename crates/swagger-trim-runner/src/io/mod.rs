mod read_document;
mod write_document;

pub use read_document::read_swagger_document;
pub use write_document::write_swagger_document;

use crate::config::render_issues;
use swagger_trim_core::StructuredIssue;

#[derive(Debug, thiserror::Error)]
pub enum DocumentIoError {
    #[error("read input document failed `{path}`: {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("input document `{path}` is not a usable swagger 2.0 document: {}", render_issues(.issues))]
    Deserialization {
        path: String,
        issues: Vec<StructuredIssue>,
    },
    #[error("write output document failed `{path}`: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("encode output document failed: {0}")]
    Encode(#[from] serde_json::Error),
}
