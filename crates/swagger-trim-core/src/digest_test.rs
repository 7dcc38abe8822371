use super::{canonical_json_bytes, digest_hex, CanonicalJsonOptions};
use serde_json::json;

#[test]
fn canonical_bytes_sort_nested_keys() {
    let value = json!({"paths": {"/b": {}, "/a": {}}, "info": {"version": "v1.0", "title": "t"}});
    let bytes =
        canonical_json_bytes(&value, &CanonicalJsonOptions::default()).expect("must encode");
    let text = String::from_utf8(bytes).expect("must be utf8 json");
    assert_eq!(
        text,
        r#"{"info":{"title":"t","version":"v1.0"},"paths":{"/a":{},"/b":{}}}"#
    );
}

#[test]
fn digest_ignores_configured_keys_and_ordering() {
    let left = json!({"b": 2, "a": 1, "x-generated-at": "t1"});
    let right = json!({"a": 1, "b": 2, "x-generated-at": "t2"});
    let mut options = CanonicalJsonOptions::default();
    options.ignore_object_keys.insert("x-generated-at".to_string());

    let left_hash = digest_hex(&left, &options).expect("hash");
    let right_hash = digest_hex(&right, &options).expect("hash");
    assert_eq!(left_hash, right_hash);
    assert_eq!(left_hash.len(), 64);
}
