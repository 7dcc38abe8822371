use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use swagger_trim_core::{IssueSeverity, JsonPointer, StructuredIssue};
use swagger_trim_sdk::TransformOptions;

pub const RUNNER_CONFIG_SCHEMA: &str = "swagger-trim/0.0.1";

/// Config file contents. Every transform field is optional and falls back to
/// the built-in cloud API defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_runner_schema")]
    pub schema: String,
    #[serde(flatten)]
    pub transform: TransformOptions,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            schema: default_runner_schema(),
            transform: TransformOptions::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerConfigError {
    #[error("read runner config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("runner config parse failed: {0}")]
    Parse(String),
    #[error("runner config validation failed: {}", render_issues(.0))]
    Validation(Vec<StructuredIssue>),
}

pub fn load_runner_config(path: &Path) -> Result<RunnerConfig, RunnerConfigError> {
    let text = fs::read_to_string(path).map_err(|source| RunnerConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let text = substitute_env_vars(text.as_str()).map_err(RunnerConfigError::Parse)?;
    let config = decode_config(path, text.as_str())?;

    let mut issues = validate_runner_config(&config);
    if issues.is_empty() {
        return Ok(config);
    }
    StructuredIssue::sort_stable(&mut issues);
    Err(RunnerConfigError::Validation(issues))
}

/// Picks the decoder from the file extension; unknown extensions try YAML,
/// which also accepts plain JSON, before giving JSON its own attempt.
fn decode_config(path: &Path, text: &str) -> Result<RunnerConfig, RunnerConfigError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => serde_json::from_str(text)
            .map_err(|error| RunnerConfigError::Parse(format!("json config: {error}"))),
        Some("yaml" | "yml") => serde_yaml::from_str(text)
            .map_err(|error| RunnerConfigError::Parse(format!("yaml config: {error}"))),
        _ => match serde_yaml::from_str::<RunnerConfig>(text) {
            Ok(config) => Ok(config),
            Err(yaml_error) => serde_json::from_str(text).map_err(|json_error| {
                RunnerConfigError::Parse(format!(
                    "config is neither yaml ({yaml_error}) nor json ({json_error})"
                ))
            }),
        },
    }
}

pub fn validate_runner_config(config: &RunnerConfig) -> Vec<StructuredIssue> {
    let mut issues = Vec::<StructuredIssue>::new();
    let transform = &config.transform;
    if config.schema != RUNNER_CONFIG_SCHEMA {
        issues.push(config_issue(
            "runner.config.schema",
            JsonPointer::from_keys(["schema"]),
            format!(
                "unsupported runner config schema `{}` (expected `{RUNNER_CONFIG_SCHEMA}`)",
                config.schema
            ),
        ));
    }

    if transform.whitelist.is_empty() {
        issues.push(config_issue(
            "runner.config.whitelist.non_empty",
            JsonPointer::from_keys(["whitelist"]),
            "whitelist must contain at least one entry".to_string(),
        ));
    }
    for (index, pattern) in transform.whitelist.patterns().iter().enumerate() {
        if pattern.trim().is_empty() {
            issues.push(config_issue(
                "runner.config.whitelist.blank_entry",
                JsonPointer::from_keys(["whitelist"]).child_index(index),
                "whitelist entries must not be blank; a blank entry matches every path".to_string(),
            ));
        }
    }

    for (field, value) in [
        ("title", &transform.metadata.title),
        ("version", &transform.metadata.version),
    ] {
        if value.trim().is_empty() {
            issues.push(config_issue(
                "runner.config.metadata",
                JsonPointer::from_keys(["metadata", field]),
                format!("metadata.{field} must not be empty"),
            ));
        }
    }

    if transform.cluster_parameter.name.trim().is_empty() {
        issues.push(config_issue(
            "runner.config.cluster_parameter.name",
            JsonPointer::from_keys(["cluster_parameter", "name"]),
            "cluster_parameter.name must not be empty".to_string(),
        ));
    }

    if !transform.synthetic.path.starts_with('/') {
        issues.push(config_issue(
            "runner.config.synthetic.path",
            JsonPointer::from_keys(["synthetic", "path"]),
            format!(
                "synthetic.path `{}` must start with `/`",
                transform.synthetic.path
            ),
        ));
    }
    if transform.synthetic.definition_prefix.trim().is_empty() {
        issues.push(config_issue(
            "runner.config.synthetic.definition_prefix",
            JsonPointer::from_keys(["synthetic", "definition_prefix"]),
            "synthetic.definition_prefix must not be empty".to_string(),
        ));
    }

    issues
}

pub(crate) fn render_issues(issues: &[StructuredIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn config_issue(reference: &str, location: JsonPointer, message: String) -> StructuredIssue {
    StructuredIssue::new("runner_config_error", IssueSeverity::Error, location, message)
        .with_reference(reference)
}

fn default_runner_schema() -> String {
    RUNNER_CONFIG_SCHEMA.to_string()
}

/// Replaces every `${NAME}` with the value of the environment variable `NAME`.
fn substitute_env_vars(text: &str) -> Result<String, String> {
    let mut expanded = String::with_capacity(text.len());
    let mut rest = text;
    while let Some((before, after)) = rest.split_once("${") {
        expanded.push_str(before);
        let (name, tail) = after
            .split_once('}')
            .ok_or_else(|| "env placeholder `${` is never closed".to_string())?;
        if name.trim().is_empty() {
            return Err("env placeholder `${}` has no variable name".to_string());
        }
        let value = std::env::var(name)
            .map_err(|_| format!("env var `{name}` referenced by the config is not set"))?;
        expanded.push_str(value.as_str());
        rest = tail;
    }
    expanded.push_str(rest);
    Ok(expanded)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
