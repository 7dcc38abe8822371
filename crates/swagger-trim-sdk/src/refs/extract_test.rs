use super::{collect_refs, definition_name, definition_ref, ReferenceError};
use serde_json::json;
use swagger_trim_core::JsonPointer;

#[test]
fn collect_refs_finds_nested_arrays_and_all_of() {
    let fragment = json!({
        "get": {
            "parameters": [
                {"name": "body", "in": "body", "schema": {"$ref": "#/definitions/A"}}
            ],
            "responses": {
                "200": {"schema": {"type": "array", "items": {"$ref": "#/definitions/B"}}},
                "default": {"schema": {"allOf": [{"$ref": "#/definitions/C"}, {"$ref": "#/definitions/A"}]}}
            }
        }
    });

    let refs = collect_refs(&fragment, &JsonPointer::from_keys(["paths", "/api/v1/pods"]));
    let mut targets = refs.iter().map(|r| r.target.as_str()).collect::<Vec<_>>();
    targets.sort();
    assert_eq!(
        targets,
        vec!["#/definitions/A", "#/definitions/A", "#/definitions/B", "#/definitions/C"]
    );
    assert_eq!(refs.len(), 4);
    assert!(refs.iter().any(|r| {
        r.location.to_string() == "#/paths/~1api~1v1~1pods/get/parameters/0/schema"
    }));
}

#[test]
fn property_named_ref_is_not_mistaken_for_a_reference() {
    let fragment = json!({
        "properties": {
            "$ref": {"type": "string", "description": "a field literally called $ref"},
            "spec": {"$ref": "#/definitions/Spec"}
        }
    });
    let refs = collect_refs(&fragment, &JsonPointer::root());
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].target, "#/definitions/Spec");
    assert_eq!(refs[0].location.to_string(), "#/properties/spec");
}

#[test]
fn definition_name_strips_prefix_and_decodes_escapes() {
    assert_eq!(
        definition_name("#/definitions/io.k8s.api.core.v1.Pod").expect("name"),
        "io.k8s.api.core.v1.Pod"
    );
    assert_eq!(definition_name("#/definitions/a~1b").expect("name"), "a/b");
    assert_eq!(definition_ref("io.k8s.api.core.v1.Pod"), "#/definitions/io.k8s.api.core.v1.Pod");
}

#[test]
fn non_definition_targets_are_rejected() {
    assert_eq!(
        definition_name("#/parameters/body-xyz"),
        Err(ReferenceError::UnsupportedTarget {
            target: "#/parameters/body-xyz".to_string()
        })
    );
    assert!(matches!(
        definition_name("https://example.com/schema.json"),
        Err(ReferenceError::UnsupportedTarget { .. })
    ));
    assert!(matches!(
        definition_name("#definitions/Cluster"),
        Err(ReferenceError::InvalidPointer { .. })
    ));
    assert!(matches!(
        definition_name("#/definitions/"),
        Err(ReferenceError::UnsupportedTarget { .. })
    ));
}
