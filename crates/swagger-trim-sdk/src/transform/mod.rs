mod options;
mod pipeline;

pub use options::{
    ClusterParameterOptions, DocumentMetadata, SyntheticClustersOptions, TransformOptions,
    DEFAULT_WHITELIST,
};
pub use pipeline::{transform_document, TransformError, TransformReport, TransformSummary};
