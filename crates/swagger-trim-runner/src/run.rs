use crate::cli::{ClosureCommand, OutputFormat, PathsCommand, TransformCommand};
use crate::config::{load_runner_config, RunnerConfigError};
use crate::io::{read_swagger_document, write_swagger_document, DocumentIoError};
use serde_json::json;
use std::path::Path;
use swagger_trim_core::{digest_hex, CanonicalJsonOptions, IssueSeverity, StructuredIssue};
use swagger_trim_sdk::{
    extract_reference_closure, filter_paths, transform_document, ClosureError, TransformError,
    TransformOptions, TransformReport,
};
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error(transparent)]
    Document(#[from] DocumentIoError),
    #[error("runner config load failed: {0}")]
    Config(#[from] RunnerConfigError),
    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),
    #[error("closure failed: {0}")]
    Closure(#[from] ClosureError),
    #[error("path `{0}` is not present in the input document")]
    UnknownPath(String),
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

pub fn execute_transform(command: &TransformCommand) -> Result<String, RunnerError> {
    let options = load_transform_options(command.config.as_deref())?;
    let document = read_swagger_document(&command.input, command.input_format.into())?;
    let report = transform_document(document, &options)?;
    log_issues(&report.issues);

    let bytes_written = if command.dry_run {
        info!(output = %command.output.display(), "dry run, output document not written");
        None
    } else {
        Some(write_swagger_document(&command.output, &report.document)?)
    };
    let digest = digest_hex(
        &serde_json::to_value(&report.document)?,
        &CanonicalJsonOptions::default(),
    )?;

    match command.format {
        OutputFormat::Json => {
            let mut output = json!({
                "input": command.input.display().to_string(),
                "output": bytes_written.map(|_| command.output.display().to_string()),
                "bytes_written": bytes_written,
                "sha256": digest,
                "summary": report.summary,
                "issues": report.issues,
            });
            if command.list_paths {
                output["paths"] = json!({
                    "input": report.original_path_keys,
                    "retained": report.retained_path_keys,
                });
            }
            serde_json::to_string_pretty(&output).map_err(RunnerError::from)
        }
        OutputFormat::Text => Ok(render_transform_text(
            command,
            &report,
            digest.as_str(),
            bytes_written,
        )),
    }
}

pub fn execute_closure(command: &ClosureCommand) -> Result<String, RunnerError> {
    let options = load_transform_options(command.config.as_deref())?;
    let document = read_swagger_document(&command.input, command.input_format.into())?;
    let item = document
        .paths
        .get(command.path.as_str())
        .ok_or_else(|| RunnerError::UnknownPath(command.path.clone()))?;
    let closure = extract_reference_closure(&document.definitions, item, options.cycle_policy)?;
    log_issues(&closure.issues);

    match command.format {
        OutputFormat::Json => {
            let output = json!({
                "path": command.path,
                "definitions": closure.names,
                "occurrences": closure.occurrences,
                "dangling": closure.dangling,
                "cycles": closure.cycles,
            });
            serde_json::to_string_pretty(&output).map_err(RunnerError::from)
        }
        OutputFormat::Text => {
            let mut lines = vec![format!(
                "{}: {} definitions, {} references",
                command.path,
                closure.names.len(),
                closure.occurrences
            )];
            for name in &closure.names {
                if closure.dangling.contains(name) {
                    lines.push(format!("  {name} (missing)"));
                } else {
                    lines.push(format!("  {name}"));
                }
            }
            for cycle in &closure.cycles {
                lines.push(format!("  cycle: {}", cycle.join(" -> ")));
            }
            Ok(lines.join("\n"))
        }
    }
}

pub fn execute_paths(command: &PathsCommand) -> Result<String, RunnerError> {
    let options = load_transform_options(command.config.as_deref())?;
    let document = read_swagger_document(&command.input, command.input_format.into())?;
    let keys = if command.retained {
        filter_paths(document.paths, &options.whitelist)
            .retained
            .keys()
            .cloned()
            .collect::<Vec<_>>()
    } else {
        document.paths.keys().cloned().collect::<Vec<_>>()
    };
    Ok(keys
        .iter()
        .map(|key| format!("\"{key}\""))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn load_transform_options(config: Option<&Path>) -> Result<TransformOptions, RunnerError> {
    match config {
        Some(path) => {
            let config = load_runner_config(path)?;
            debug!(path = %path.display(), "loaded runner config");
            Ok(config.transform)
        }
        None => Ok(TransformOptions::default()),
    }
}

fn log_issues(issues: &[StructuredIssue]) {
    for issue in issues {
        match issue.severity {
            IssueSeverity::Error | IssueSeverity::Warning => warn!("{issue}"),
            IssueSeverity::Info => debug!("{issue}"),
        }
    }
}

fn render_transform_text(
    command: &TransformCommand,
    report: &TransformReport,
    digest: &str,
    bytes_written: Option<usize>,
) -> String {
    let summary = &report.summary;
    let output = match bytes_written {
        Some(bytes) => format!("{} ({bytes} bytes)", command.output.display()),
        None => "dry run, not written".to_string(),
    };
    let dangling = if summary.dangling_references.is_empty() {
        "none".to_string()
    } else {
        summary.dangling_references.join(", ")
    };
    let cycles = if summary.cycles.is_empty() {
        "none".to_string()
    } else {
        summary
            .cycles
            .iter()
            .map(|cycle| cycle.join(" -> "))
            .collect::<Vec<_>>()
            .join("; ")
    };

    let mut lines = vec![
        format!("input: {}", command.input.display()),
        format!("output: {output}"),
        format!(
            "paths: {} -> {} retained, {} written",
            summary.original_paths, summary.retained_paths, summary.output_paths
        ),
        format!(
            "definitions: {} -> {} retained, {} written",
            summary.original_definitions, summary.retained_definitions, summary.output_definitions
        ),
        format!("parameters appended: {}", summary.parameters_appended),
        format!("references followed: {}", summary.reference_count),
        format!("dangling references: {dangling}"),
        format!("cycles: {cycles}"),
        format!("sha256: {digest}"),
    ];
    if command.list_paths {
        push_path_listing(&mut lines, "input paths", &report.original_path_keys);
        push_path_listing(&mut lines, "retained paths", &report.retained_path_keys);
    }
    lines.join("\n")
}

fn push_path_listing(lines: &mut Vec<String>, title: &str, keys: &[String]) {
    lines.push(format!("{title}: {}", keys.len()));
    lines.extend(keys.iter().map(|key| format!("  \"{key}\"")));
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
