use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const SWAGGER_VERSION_2_0: &str = "2.0";

/// Swagger 2.0 document. Only the top-level shape is typed; path items and
/// definitions stay opaque so they round-trip untouched. Top-level fields that
/// are not modeled here are dropped on parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    pub swagger: String,
    #[serde(default)]
    pub info: Info,
    #[serde(rename = "securityDefinitions", default)]
    pub security_definitions: BTreeMap<String, SecurityScheme>,
    #[serde(default)]
    pub security: Vec<Value>,
    pub paths: Map<String, Value>,
    #[serde(default)]
    pub definitions: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub scheme_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "in", default)]
    pub location: String,
}

impl SwaggerDocument {
    pub fn path_keys(&self) -> Vec<String> {
        self.paths.keys().cloned().collect()
    }
}
