//! Integration tests for Error types
//!
//! Tests error construction, display and error kinds.

use mapkit::{Error, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_duplicate_key() {
    let err = Error::duplicate_key(&42);
    assert!(err.is_duplicate_key());
    assert!(matches!(err.kind, ErrorKind::DuplicateKey { ref key } if key == "42"));
}

#[test]
fn error_parse() {
    let err = Error::parse("trailing comma", 1, 9);
    assert!(err.is_parse());
    assert!(!err.is_type_mismatch());
}

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch("u8", "string");
    assert!(err.is_type_mismatch());
    let msg = format!("{err}");
    assert!(msg.contains("u8"));
    assert!(msg.contains("string"));
}

#[test]
fn error_encode() {
    let err = Error::encode("key must be a string");
    assert!(matches!(err.kind, ErrorKind::Encode(_)));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_parse_position() {
    let err = Error::parse("EOF while parsing an object", 2, 14);
    assert_eq!(
        format!("{err}"),
        "parse error at 2:14: EOF while parsing an object"
    );
}

#[test]
fn error_display_incomparable() {
    let err = Error::incomparable::<f32>();
    assert_eq!(format!("{err}"), "incomparable values of type f32");
}

#[test]
fn error_display_unsupported_value_type() {
    let err = Error::unsupported_value_type::<String>("cannot copy");
    let msg = format!("{err}");
    assert!(msg.starts_with("unsupported value type"));
    assert!(msg.contains("String"));
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::encode("x"));
}
