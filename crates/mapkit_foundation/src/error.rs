//! Error types for mapkit operations.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout mapkit.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for mapkit operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a duplicate key error, rendering the key with `Debug`.
    #[must_use]
    pub fn duplicate_key(key: &impl fmt::Debug) -> Self {
        Self::new(ErrorKind::DuplicateKey {
            key: format!("{key:?}"),
        })
    }

    /// Creates a parse error for malformed interchange text.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(ErrorKind::Parse {
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        })
    }

    /// Creates an unsupported value type error for `T`.
    #[must_use]
    pub fn unsupported_value_type<T: ?Sized>(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedValueType {
            type_name: std::any::type_name::<T>(),
            reason: reason.into(),
        })
    }

    /// Creates an incomparable type error for `T`.
    #[must_use]
    pub fn incomparable<T: ?Sized>() -> Self {
        Self::new(ErrorKind::IncomparableType {
            type_name: std::any::type_name::<T>(),
        })
    }

    /// Creates an encode error.
    #[must_use]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Encode(message.into()))
    }

    /// Returns true if this is a duplicate key error.
    #[must_use]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self.kind, ErrorKind::DuplicateKey { .. })
    }

    /// Returns true if this error came from malformed interchange text.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self.kind, ErrorKind::Parse { .. })
    }

    /// Returns true if this is a type mismatch error.
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A strict insert hit a key that is already present.
    #[error("duplicate key: {key}")]
    DuplicateKey {
        /// Debug rendering of the offending key.
        key: String,
    },

    /// Interchange text is not well formed.
    #[error("parse error at {line}:{column}: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },

    /// Decoded data does not have the requested key or value shape.
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        /// Description of the expected shape.
        expected: String,
        /// Description of what was found.
        found: String,
    },

    /// The value type cannot be independently copied.
    #[error("unsupported value type {type_name}: {reason}")]
    UnsupportedValueType {
        /// Name of the value type.
        type_name: &'static str,
        /// Why the copy failed.
        reason: String,
    },

    /// Two keys or values have no defined order relative to each other.
    #[error("incomparable values of type {type_name}")]
    IncomparableType {
        /// Name of the type lacking a total order.
        type_name: &'static str,
    },

    /// The codec could not write a value.
    #[error("encode error: {0}")]
    Encode(String),
}
