use super::{
    build_definition_closure, extract_reference_closure, ClosureError, CyclePolicy,
};
use crate::refs::{collect_refs, definition_name};
use serde_json::{json, Map, Value};
use swagger_trim_core::{IssueSeverity, JsonPointer};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().expect("object").clone()
}

fn chain_definitions() -> Map<String, Value> {
    object(json!({
        "A": {"type": "object", "properties": {"b": {"$ref": "#/definitions/B"}}},
        "B": {"type": "object", "properties": {"c": {"type": "array", "items": {"$ref": "#/definitions/C"}}}},
        "C": {"type": "object", "properties": {"name": {"type": "string"}}},
        "D": {"type": "object", "properties": {"c": {"$ref": "#/definitions/C"}}}
    }))
}

#[test]
fn chain_reachable_only_through_a_is_fully_included() {
    let paths = object(json!({
        "/api/v1/pods": {"get": {"responses": {"200": {"schema": {"$ref": "#/definitions/A"}}}}}
    }));

    let closure = build_definition_closure(&paths, &chain_definitions(), CyclePolicy::Break)
        .expect("closure");
    assert_eq!(
        closure.reachable.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["A", "B", "C"]
    );
    assert!(!closure.definitions.contains_key("D"));
    assert_eq!(closure.definitions["C"], chain_definitions()["C"]);
    assert!(closure.dangling.is_empty());
    assert!(closure.cycles.is_empty());
}

#[test]
fn nesting_deeper_than_two_hops_is_still_reached() {
    let definitions = object(json!({
        "L1": {"properties": {"n": {"$ref": "#/definitions/L2"}}},
        "L2": {"properties": {"n": {"$ref": "#/definitions/L3"}}},
        "L3": {"properties": {"n": {"$ref": "#/definitions/L4"}}},
        "L4": {"properties": {"n": {"$ref": "#/definitions/L5"}}},
        "L5": {"type": "string"}
    }));
    let paths = object(json!({"/p": {"get": {"responses": {"200": {"schema": {"$ref": "#/definitions/L1"}}}}}}));

    let closure =
        build_definition_closure(&paths, &definitions, CyclePolicy::Break).expect("closure");
    assert_eq!(closure.reachable.len(), 5);
    assert!(closure.definitions.contains_key("L5"));
}

#[test]
fn closure_is_sound_over_retained_definitions() {
    let paths = object(json!({
        "/api/v1/pods": {"get": {"responses": {"200": {"schema": {"$ref": "#/definitions/A"}}}}},
        "/api/v1/nodes": {"parameters": [{"in": "body", "schema": {"$ref": "#/definitions/D"}}]}
    }));
    let closure = build_definition_closure(&paths, &chain_definitions(), CyclePolicy::Break)
        .expect("closure");

    for (name, definition) in &closure.definitions {
        let base = JsonPointer::from_keys(["definitions", name.as_str()]);
        for occurrence in collect_refs(definition, &base) {
            let target = definition_name(occurrence.target.as_str()).expect("definition ref");
            assert!(closure.definitions.contains_key(&target), "{name} -> {target} missing");
        }
    }
    assert_eq!(closure.definitions.len(), 4);
}

#[test]
fn dangling_reference_is_reported_and_not_inserted() {
    let paths = object(json!({
        "/api/v1/pods": {"get": {"responses": {"200": {"schema": {"$ref": "#/definitions/Missing"}}}}}
    }));
    let closure = build_definition_closure(&paths, &chain_definitions(), CyclePolicy::Break)
        .expect("closure");

    assert!(closure.definitions.is_empty());
    assert!(closure.dangling.contains("Missing"));
    assert_eq!(closure.issues.len(), 1);
    assert_eq!(closure.issues[0].severity, IssueSeverity::Warning);
    assert_eq!(closure.issues[0].reference.as_deref(), Some("ref.dangling"));
    assert_eq!(
        closure.issues[0].location.to_string(),
        "#/paths/~1api~1v1~1pods/get/responses/200/schema"
    );
}

#[test]
fn cycle_is_broken_and_reported_under_break_policy() {
    let definitions = object(json!({
        "A": {"properties": {"b": {"$ref": "#/definitions/B"}}},
        "B": {"properties": {"a": {"$ref": "#/definitions/A"}}}
    }));
    let paths = object(json!({"/p": {"get": {"responses": {"200": {"schema": {"$ref": "#/definitions/A"}}}}}}));

    let closure =
        build_definition_closure(&paths, &definitions, CyclePolicy::Break).expect("closure");
    assert_eq!(closure.reachable.len(), 2);
    assert_eq!(closure.cycles, vec![vec!["A".to_string(), "B".to_string(), "A".to_string()]]);
    assert!(closure
        .issues
        .iter()
        .any(|issue| issue.reference.as_deref() == Some("ref.cycle")));
}

#[test]
fn cycle_aborts_under_reject_policy() {
    let definitions = object(json!({
        "A": {"properties": {"b": {"$ref": "#/definitions/B"}}},
        "B": {"properties": {"a": {"$ref": "#/definitions/A"}}}
    }));
    let paths = object(json!({"/p": {"get": {"responses": {"200": {"schema": {"$ref": "#/definitions/A"}}}}}}));

    let error = build_definition_closure(&paths, &definitions, CyclePolicy::Reject)
        .expect_err("must reject");
    assert_eq!(
        error,
        ClosureError::CyclicReference {
            cycle: vec!["A".to_string(), "B".to_string(), "A".to_string()]
        }
    );
    assert_eq!(error.to_string(), "cyclic definition reference detected: A -> B -> A");
}

#[test]
fn self_reference_is_a_cycle_of_one() {
    let definitions = object(json!({
        "JSONSchemaProps": {"properties": {"not": {"$ref": "#/definitions/JSONSchemaProps"}}}
    }));
    let fragment = json!({"schema": {"$ref": "#/definitions/JSONSchemaProps"}});

    let closure =
        extract_reference_closure(&definitions, &fragment, CyclePolicy::Break).expect("closure");
    assert_eq!(closure.names, vec!["JSONSchemaProps".to_string()]);
    assert_eq!(
        closure.cycles,
        vec![vec!["JSONSchemaProps".to_string(), "JSONSchemaProps".to_string()]]
    );
}

#[test]
fn extractor_counts_repeats_but_lists_each_name_once() {
    let fragment = json!({
        "a": {"$ref": "#/definitions/A"},
        "b": [{"$ref": "#/definitions/A"}, {"$ref": "#/parameters/shared"}]
    });
    let closure = extract_reference_closure(&chain_definitions(), &fragment, CyclePolicy::Break)
        .expect("closure");

    assert_eq!(closure.names, vec!["A", "B", "C"]);
    assert!(closure.contains("C"));
    assert_eq!(closure.occurrences, 5);
    assert!(closure
        .issues
        .iter()
        .any(|issue| issue.reference.as_deref() == Some("ref.unsupported_target")));
}
