use serde_json::Value;
use swagger_trim_core::JsonPointer;

pub const DEFINITIONS_REF_PREFIX: &str = "#/definitions/";

/// A `$ref` string found while walking a JSON fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefOccurrence {
    pub target: String,
    pub location: JsonPointer,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("invalid reference `{target}`: {reason}")]
    InvalidPointer { target: String, reason: String },
    #[error("unsupported reference target `{target}`: only `#/definitions/<name>` is followed")]
    UnsupportedTarget { target: String },
}

pub fn definition_ref(name: &str) -> String {
    format!("{DEFINITIONS_REF_PREFIX}{name}")
}

/// Resolves `#/definitions/<name>` to `<name>`. The name is a single pointer
/// segment, so `~1` and `~0` escapes are decoded.
pub fn definition_name(target: &str) -> Result<String, ReferenceError> {
    if !target.starts_with('#') {
        return Err(ReferenceError::UnsupportedTarget {
            target: target.to_string(),
        });
    }
    let pointer = target
        .parse::<JsonPointer>()
        .map_err(|error| ReferenceError::InvalidPointer {
            target: target.to_string(),
            reason: error.to_string(),
        })?;
    match pointer.keys().as_deref() {
        Some(["definitions", name]) if !name.is_empty() => Ok((*name).to_string()),
        _ => Err(ReferenceError::UnsupportedTarget {
            target: target.to_string(),
        }),
    }
}

/// Walks `fragment` and reports every object field named `$ref` whose value
/// is a string, in document order. `base` is the location of `fragment`.
pub fn collect_refs(fragment: &Value, base: &JsonPointer) -> Vec<RefOccurrence> {
    let mut out = Vec::new();
    collect_refs_inner(fragment, base, &mut out);
    out
}

fn collect_refs_inner(value: &Value, location: &JsonPointer, out: &mut Vec<RefOccurrence>) {
    match value {
        Value::Object(object) => {
            if let Some(Value::String(target)) = object.get("$ref") {
                out.push(RefOccurrence {
                    target: target.clone(),
                    location: location.clone(),
                });
            }
            for (key, child) in object {
                if child.is_object() || child.is_array() {
                    collect_refs_inner(child, &location.child_key(key.as_str()), out);
                }
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if item.is_object() || item.is_array() {
                    collect_refs_inner(item, &location.child_index(index), out);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
