pub mod documents;
pub mod edit;
pub mod filter;
pub mod parse;
pub mod refs;
pub mod transform;

pub use documents::{
    Info, Operation, Parameter, PropertyItems, Response, SchemaDefinition, SchemaProperty,
    SchemaRef, SecurityScheme, SwaggerDocument, SWAGGER_VERSION_2_0,
};
pub use edit::{
    append_parameter_to_paths, append_required_parameter, apply_metadata,
    build_cluster_definition, build_clusters_definition, build_clusters_operation,
    insert_synthetic_content, EditError, ParameterEdit,
};
pub use filter::{filter_paths, PathFilterOutcome, PathWhitelist};
pub use parse::{
    parse_swagger_document, parse_swagger_document_with_options, render_swagger_document,
    DocumentFormat, ParseDocumentOptions,
};
pub use refs::{
    build_definition_closure, collect_refs, definition_name, definition_ref,
    extract_reference_closure, ClosureError, CyclePolicy, DefinitionClosure, RefOccurrence,
    ReferenceClosure, ReferenceError, DEFINITIONS_REF_PREFIX,
};
pub use transform::{
    transform_document, ClusterParameterOptions, DocumentMetadata, SyntheticClustersOptions,
    TransformError, TransformOptions, TransformReport, TransformSummary, DEFAULT_WHITELIST,
};
