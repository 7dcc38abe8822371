mod metadata;
mod parameters;
mod synthetic;

pub use metadata::apply_metadata;
pub use parameters::{append_parameter_to_paths, append_required_parameter, ParameterEdit};
pub use synthetic::{
    build_cluster_definition, build_clusters_definition, build_clusters_operation,
    insert_synthetic_content,
};

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("path item `{path}` must be an object")]
    PathItemNotObject { path: String },
    #[error("`parameters` of path `{path}` must be an array")]
    ParametersNotArray { path: String },
    #[error("synthetic content encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}
