use serde_json::Value;
use swagger_trim_core::{IssueSeverity, JsonPointer, StructuredIssue};

pub fn parse_yaml(input: &str) -> Result<Value, Vec<StructuredIssue>> {
    let yaml_value: serde_yaml::Value = serde_yaml::from_str(input).map_err(|err| {
        vec![StructuredIssue::new(
            "parse_error",
            IssueSeverity::Error,
            JsonPointer::root(),
            format!("yaml parse failed: {err}"),
        )
        .with_reference("yaml.parse_error")]
    })?;

    serde_json::to_value(yaml_value).map_err(|err| {
        vec![StructuredIssue::new(
            "parse_error",
            IssueSeverity::Error,
            JsonPointer::root(),
            format!("yaml-to-json conversion failed: {err}"),
        )
        .with_reference("yaml.to_json_error")]
    })
}
