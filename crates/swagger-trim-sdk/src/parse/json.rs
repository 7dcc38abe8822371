use serde_json::Value;
use swagger_trim_core::{IssueSeverity, JsonPointer, StructuredIssue};

pub fn parse_json(input: &str) -> Result<Value, Vec<StructuredIssue>> {
    serde_json::from_str::<Value>(input).map_err(|err| {
        vec![StructuredIssue::new(
            "parse_error",
            IssueSeverity::Error,
            JsonPointer::root(),
            format!("json parse failed: {err}"),
        )
        .with_reference("json.parse_error")]
    })
}
