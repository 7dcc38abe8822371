use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
pub struct CanonicalJsonOptions {
    pub ignore_object_keys: BTreeSet<String>,
}

/// Compact JSON with object keys sorted at every level, independent of the
/// map ordering the value was built with.
pub fn canonical_json_bytes(
    value: &Value,
    options: &CanonicalJsonOptions,
) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(&canonicalize(value, options))
}

pub fn digest_hex(value: &Value, options: &CanonicalJsonOptions) -> serde_json::Result<String> {
    let bytes = canonical_json_bytes(value, options)?;
    Ok(format!("{:x}", Sha256::digest(bytes)))
}

fn canonicalize(value: &Value, options: &CanonicalJsonOptions) -> Value {
    match value {
        Value::Object(object) => {
            let ordered = object
                .iter()
                .filter(|(key, _)| !options.ignore_object_keys.contains(*key))
                .map(|(key, value)| (key.clone(), canonicalize(value, options)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(ordered.into_iter().collect::<Map<_, _>>())
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| canonicalize(item, options))
                .collect(),
        ),
        _ => value.clone(),
    }
}

#[cfg(test)]
#[path = "digest_test.rs"]
mod tests;
