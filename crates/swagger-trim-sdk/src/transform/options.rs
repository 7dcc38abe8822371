use crate::documents::Parameter;
use crate::filter::PathWhitelist;
use crate::refs::CyclePolicy;
use serde::{Deserialize, Serialize};

/// Kubernetes resources exposed through the cloud API.
pub const DEFAULT_WHITELIST: [&str; 14] = [
    "namespaces",
    "nodes",
    "events",
    "pods",
    "deployments",
    "services",
    "ingresses",
    "secrets",
    "configmaps",
    "serviceaccounts",
    "clusterroles",
    "clusterrolebindings",
    "roles",
    "rolebindings",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    pub whitelist: PathWhitelist,
    pub metadata: DocumentMetadata,
    pub cluster_parameter: ClusterParameterOptions,
    pub synthetic: SyntheticClustersOptions,
    pub cycle_policy: CyclePolicy,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            whitelist: PathWhitelist::new(DEFAULT_WHITELIST),
            metadata: DocumentMetadata::default(),
            cluster_parameter: ClusterParameterOptions::default(),
            synthetic: SyntheticClustersOptions::default(),
            cycle_policy: CyclePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    pub title: String,
    pub version: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: "luckincoffee cloud apis".to_string(),
            version: "v1.0".to_string(),
        }
    }
}

/// Required query parameter appended to every retained path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterParameterOptions {
    pub name: String,
    pub description: String,
}

impl Default for ClusterParameterOptions {
    fn default() -> Self {
        Self {
            name: "clusterid".to_string(),
            description: "id of k8s cluster".to_string(),
        }
    }
}

impl ClusterParameterOptions {
    pub fn to_parameter(&self) -> Parameter {
        Parameter::query_string(self.name.clone(), self.description.clone(), true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticClustersOptions {
    pub path: String,
    pub definition_prefix: String,
    pub provider_types: Vec<String>,
    pub region_names: Vec<String>,
    pub tag: String,
}

impl Default for SyntheticClustersOptions {
    fn default() -> Self {
        Self {
            path: "/api/v3/clusters".to_string(),
            definition_prefix: "com.luckincoffee.cloud.pkg.api.v1".to_string(),
            provider_types: vec!["private".to_string()],
            region_names: vec!["logicA".to_string()],
            tag: "core".to_string(),
        }
    }
}

impl SyntheticClustersOptions {
    pub fn clusters_definition_name(&self) -> String {
        format!("{}.Clusters", self.definition_prefix)
    }

    pub fn cluster_definition_name(&self) -> String {
        format!("{}.Cluster", self.definition_prefix)
    }
}
