use super::EditError;
use crate::documents::{
    Operation, Parameter, PropertyItems, Response, SchemaDefinition, SchemaProperty, SchemaRef,
    SwaggerDocument,
};
use crate::refs::definition_ref;
use crate::transform::SyntheticClustersOptions;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const JSON_MEDIA_TYPE: &str = "application/json";

pub fn build_clusters_operation(options: &SyntheticClustersOptions) -> Operation {
    let mut responses = BTreeMap::new();
    responses.insert(
        "200".to_string(),
        Response {
            description: "OK".to_string(),
            schema: Some(SchemaRef {
                reference: definition_ref(options.clusters_definition_name().as_str()),
            }),
        },
    );
    responses.insert(
        "401".to_string(),
        Response {
            description: "Unauthorized".to_string(),
            schema: None,
        },
    );

    Operation {
        consumes: vec![JSON_MEDIA_TYPE.to_string()],
        description: "get all available k8s clusters".to_string(),
        operation_id: String::new(),
        produces: vec![JSON_MEDIA_TYPE.to_string()],
        parameters: vec![
            Parameter::query_string("providerType", "providerType of k8s cluster", false)
                .with_enum(options.provider_types.clone()),
            Parameter::query_string("regionName", "regionName of k8s cluster", false)
                .with_enum(options.region_names.clone()),
        ],
        responses,
        schemes: Vec::new(),
        tags: vec![options.tag.clone()],
    }
}

pub fn build_clusters_definition(options: &SyntheticClustersOptions) -> SchemaDefinition {
    let mut properties = BTreeMap::new();
    properties.insert(
        "apiVersion".to_string(),
        SchemaProperty::string(
            "APIVersion defines the versioned schema of this representation of an object. \
             Servers should convert recognized schemas to the latest internal value, and may \
             reject unrecognized values.",
        ),
    );
    properties.insert(
        "items".to_string(),
        SchemaProperty {
            description: String::new(),
            property_type: "array".to_string(),
            items: Some(PropertyItems {
                item_type: None,
                reference: Some(definition_ref(options.cluster_definition_name().as_str())),
            }),
        },
    );

    SchemaDefinition {
        description: "Clusters List the k8s clusters that are available".to_string(),
        schema_type: Some("object".to_string()),
        properties,
    }
}

pub fn build_cluster_definition() -> SchemaDefinition {
    let mut properties = BTreeMap::new();
    properties.insert(
        "id".to_string(),
        SchemaProperty::string("ID is the id of the k8s cluster"),
    );
    properties.insert(
        "name".to_string(),
        SchemaProperty::string("NAME is the name of the k8s cluster"),
    );
    properties.insert(
        "providerType".to_string(),
        SchemaProperty::string("Provider is the k8s cluster providerType"),
    );

    SchemaDefinition {
        description: "Cluster is the k8s clusters that are available".to_string(),
        schema_type: Some("object".to_string()),
        properties,
    }
}

/// Inserts the clusters listing path and its two definitions, replacing any
/// entries already stored under the same keys.
pub fn insert_synthetic_content(
    document: &mut SwaggerDocument,
    options: &SyntheticClustersOptions,
) -> Result<(), EditError> {
    let mut path_item = Map::new();
    path_item.insert(
        "get".to_string(),
        serde_json::to_value(build_clusters_operation(options))?,
    );
    document
        .paths
        .insert(options.path.clone(), Value::Object(path_item));
    document.definitions.insert(
        options.clusters_definition_name(),
        serde_json::to_value(build_clusters_definition(options))?,
    );
    document.definitions.insert(
        options.cluster_definition_name(),
        serde_json::to_value(build_cluster_definition())?,
    );
    Ok(())
}

#[cfg(test)]
#[path = "synthetic_test.rs"]
mod tests;
