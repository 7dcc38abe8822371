use super::options::TransformOptions;
use crate::documents::SwaggerDocument;
use crate::edit::{append_parameter_to_paths, apply_metadata, insert_synthetic_content, EditError};
use crate::filter::filter_paths;
use crate::refs::{build_definition_closure, ClosureError};
use serde::Serialize;
use swagger_trim_core::StructuredIssue;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error(transparent)]
    Closure(#[from] ClosureError),
    #[error(transparent)]
    Edit(#[from] EditError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformSummary {
    pub original_paths: usize,
    pub retained_paths: usize,
    pub output_paths: usize,
    pub original_definitions: usize,
    pub retained_definitions: usize,
    pub output_definitions: usize,
    pub parameters_appended: usize,
    pub reference_count: usize,
    pub dangling_references: Vec<String>,
    pub cycles: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformReport {
    pub document: SwaggerDocument,
    pub original_path_keys: Vec<String>,
    pub retained_path_keys: Vec<String>,
    pub summary: TransformSummary,
    pub issues: Vec<StructuredIssue>,
}

/// Filters paths, prunes definitions to the reachable set, then applies the
/// parameter edit, synthetic content and metadata. Either the whole document
/// is produced or an error is returned.
pub fn transform_document(
    mut document: SwaggerDocument,
    options: &TransformOptions,
) -> Result<TransformReport, TransformError> {
    let original_path_keys = document.path_keys();
    let original_definitions = document.definitions.len();
    debug!(count = original_path_keys.len(), "all paths");
    for key in &original_path_keys {
        debug!(path = %key, "input path");
    }

    let paths = std::mem::take(&mut document.paths);
    let filtered = filter_paths(paths, &options.whitelist);
    document.paths = filtered.retained;
    let retained_path_keys = document.path_keys();
    debug!(
        retained = retained_path_keys.len(),
        dropped = filtered.dropped.len(),
        "paths filtered"
    );
    for key in &retained_path_keys {
        debug!(path = %key, "retained path");
    }
    for key in &filtered.dropped {
        debug!(path = %key, "dropped path");
    }

    let closure = build_definition_closure(
        &document.paths,
        &document.definitions,
        options.cycle_policy,
    )?;
    document.definitions = closure.definitions;
    let retained_definitions = document.definitions.len();

    let parameter = options.cluster_parameter.to_parameter();
    let parameters_appended = append_parameter_to_paths(&mut document.paths, &parameter)?;
    insert_synthetic_content(&mut document, &options.synthetic)?;
    apply_metadata(&mut document, &options.metadata);

    let summary = TransformSummary {
        original_paths: original_path_keys.len(),
        retained_paths: retained_path_keys.len(),
        output_paths: document.paths.len(),
        original_definitions,
        retained_definitions,
        output_definitions: document.definitions.len(),
        parameters_appended,
        reference_count: closure.reference_count,
        dangling_references: closure.dangling.into_iter().collect(),
        cycles: closure.cycles,
    };
    info!(
        paths_before = summary.original_paths,
        paths_after = summary.output_paths,
        definitions_before = summary.original_definitions,
        definitions_after = summary.output_definitions,
        "document transformed"
    );

    Ok(TransformReport {
        document,
        original_path_keys,
        retained_path_keys,
        summary,
        issues: closure.issues,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
