mod json;
mod yaml;

use crate::documents::{SwaggerDocument, SWAGGER_VERSION_2_0};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use swagger_trim_core::{IssueSeverity, JsonPointer, StructuredIssue};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Auto,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseDocumentOptions {
    pub format: DocumentFormat,
}

pub fn parse_swagger_document(input: &str) -> Result<SwaggerDocument, Vec<StructuredIssue>> {
    parse_swagger_document_with_options(input, ParseDocumentOptions::default())
}

pub fn parse_swagger_document_with_options(
    input: &str,
    options: ParseDocumentOptions,
) -> Result<SwaggerDocument, Vec<StructuredIssue>> {
    let value = match options.format {
        DocumentFormat::Auto => {
            if looks_like_json(input) {
                json::parse_json(input)
            } else {
                yaml::parse_yaml(input)
            }
        }
        DocumentFormat::Json => json::parse_json(input),
        DocumentFormat::Yaml => yaml::parse_yaml(input),
    }?;

    let mut issues = validate_document_shape(&value);
    if !issues.is_empty() {
        StructuredIssue::sort_stable(&mut issues);
        return Err(issues);
    }

    serde_json::from_value::<SwaggerDocument>(value).map_err(|err| {
        vec![shape_issue(
            JsonPointer::root(),
            format!("typed parse failed: {err}"),
            "parse.typed_deserialize_error",
        )]
    })
}

/// Pretty JSON with 4-space indentation and a trailing newline.
pub fn render_swagger_document(document: &SwaggerDocument) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    buffer.push(b'\n');
    String::from_utf8(buffer).map_err(serde::ser::Error::custom)
}

fn looks_like_json(input: &str) -> bool {
    let trimmed = input.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

/// Checks the parts of the document the transformer reaches into. Errors
/// here abort the run before any path is filtered.
fn validate_document_shape(value: &Value) -> Vec<StructuredIssue> {
    let mut issues = Vec::new();
    let Some(root) = value.as_object() else {
        issues.push(shape_issue(
            JsonPointer::root(),
            "document root must be an object".to_string(),
            "parse.root_object",
        ));
        return issues;
    };

    match root.get("swagger") {
        Some(Value::String(version)) if version == SWAGGER_VERSION_2_0 => {}
        Some(Value::String(version)) => issues.push(shape_issue(
            JsonPointer::from_keys(["swagger"]),
            format!("unsupported swagger version `{version}` (expected `{SWAGGER_VERSION_2_0}`)"),
            "parse.unsupported_version",
        )),
        _ => issues.push(shape_issue(
            JsonPointer::from_keys(["swagger"]),
            "document must contain string field `swagger`".to_string(),
            "parse.swagger_required",
        )),
    }

    match root.get("paths") {
        Some(Value::Object(paths)) => {
            for (key, item) in paths {
                let location = JsonPointer::from_keys(["paths", key.as_str()]);
                let Some(item) = item.as_object() else {
                    issues.push(shape_issue(
                        location,
                        format!("path item `{key}` must be an object"),
                        "parse.path_item_object",
                    ));
                    continue;
                };
                if let Some(parameters) = item.get("parameters") {
                    if !parameters.is_array() {
                        issues.push(shape_issue(
                            location.child_key("parameters"),
                            format!("`parameters` of path `{key}` must be an array"),
                            "parse.path_parameters_array",
                        ));
                    }
                }
            }
        }
        Some(_) => issues.push(shape_issue(
            JsonPointer::from_keys(["paths"]),
            "`paths` must be an object".to_string(),
            "parse.paths_object",
        )),
        None => issues.push(shape_issue(
            JsonPointer::from_keys(["paths"]),
            "document must contain object field `paths`".to_string(),
            "parse.paths_required",
        )),
    }

    if let Some(definitions) = root.get("definitions") {
        if !definitions.is_object() {
            issues.push(shape_issue(
                JsonPointer::from_keys(["definitions"]),
                "`definitions` must be an object".to_string(),
                "parse.definitions_object",
            ));
        }
    }

    issues
}

fn shape_issue(location: JsonPointer, message: String, reference: &str) -> StructuredIssue {
    StructuredIssue::new("parse_error", IssueSeverity::Error, location, message)
        .with_reference(reference)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
