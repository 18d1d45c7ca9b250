//! Integration tests for interchange and interop operations

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use mapkit::prelude::*;
use mapkit::toolkit::{CodecConfig, InterchangeCodec, JsonCodec, Members, from_json, from_json_with};
use mapkit::{ErrorKind, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Endpoint {
    host: String,
    port: u16,
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn struct_values_round_trip() {
    let mut m: IndexMap<String, Endpoint> = IndexMap::new();
    m.insert(
        "primary".into(),
        Endpoint {
            host: "db1".into(),
            port: 5432,
        },
    );
    let text = m.to_json().unwrap();
    assert_eq!(text, r#"{"primary":{"host":"db1","port":5432}}"#);

    let back: IndexMap<String, Endpoint> = from_json(&text).unwrap();
    assert_eq!(back, m);
}

#[test]
fn integer_keys_become_member_names() {
    let m: BTreeMap<i32, bool> = [(-1, true), (10, false)].into_iter().collect();
    assert_eq!(m.to_json().unwrap(), r#"{"-1":true,"10":false}"#);
    let back = BTreeMap::<i32, bool>::from_json(&m.to_json().unwrap()).unwrap();
    assert_eq!(back, m);
}

#[test]
fn empty_map_is_empty_object() {
    let m: HashMap<String, i32> = HashMap::new();
    assert_eq!(m.to_json().unwrap(), "{}");
    assert!(from_json::<HashMap<String, i32>>("{}").unwrap().is_empty());
}

#[test]
fn parse_error_carries_position() {
    let err = from_json::<HashMap<String, i32>>("{\n  \"a\": }").unwrap_err();
    match err.kind {
        ErrorKind::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn struct_shape_mismatch() {
    let err = from_json::<HashMap<String, Endpoint>>(r#"{"a":{"host":"x"}}"#).unwrap_err();
    assert!(err.is_type_mismatch());
}

// =============================================================================
// Codecs
// =============================================================================

/// Codec that tags every document, to check the codec seam.
struct Tagged;

impl InterchangeCodec for Tagged {
    fn encode_object(&self, members: Members) -> Result<String> {
        let inner = JsonCodec::default().encode_object(members)?;
        Ok(format!("tagged:{inner}"))
    }

    fn decode_object(&self, text: &str) -> Result<Members> {
        let body = text.strip_prefix("tagged:").unwrap_or(text);
        JsonCodec::default().decode_object(body)
    }
}

#[test]
fn custom_codec_is_used_both_ways() {
    let m: IndexMap<&str, i32> = [("a", 1)].into_iter().collect();
    let text = m.to_json_with(&Tagged).unwrap();
    assert_eq!(text, r#"tagged:{"a":1}"#);
    let back: IndexMap<String, i32> = from_json_with(&Tagged, &text).unwrap();
    assert_eq!(back.get("a"), Some(&1));
}

#[test]
fn codec_config_builders() {
    let config = CodecConfig::default()
        .with_pretty(true)
        .with_indent(1)
        .with_sort_keys(true);
    let codec = JsonCodec::new(config.clone());
    assert_eq!(codec.config(), &config);

    let m: IndexMap<&str, i32> = [("z", 1), ("a", 2)].into_iter().collect();
    assert_eq!(m.to_json_with(&codec).unwrap(), "{\n \"a\": 2,\n \"z\": 1\n}");
}

// =============================================================================
// Query strings
// =============================================================================

#[test]
fn query_string_documented_example() {
    let mut m: IndexMap<&str, String> = IndexMap::new();
    m.insert("name", "a b".into());
    m.insert("id", 1.to_string());
    assert_eq!(m.to_query_string(), "name=a%20b&id=1");
}

#[test]
fn query_string_escapes_structural_characters() {
    let m: IndexMap<&str, &str> = [("q", "x=1&y=2"), ("k y", "~ok")].into_iter().collect();
    assert_eq!(m.to_query_string(), "q=x%3D1%26y%3D2&k%20y=~ok");
}

#[test]
fn query_string_of_empty_map() {
    let m: HashMap<&str, i32> = HashMap::new();
    assert_eq!(m.to_query_string(), "");
}

// =============================================================================
// Concurrent copies
// =============================================================================

#[test]
fn to_concurrent_map_shares_across_threads() {
    let m: IndexMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let concurrent = m.to_concurrent_map();

    let worker = {
        let concurrent = concurrent.clone();
        std::thread::spawn(move || {
            concurrent.insert("c", 3);
        })
    };
    worker.join().unwrap();

    assert_eq!(concurrent.len(), 3);
    assert_eq!(m.len(), 2);
}
