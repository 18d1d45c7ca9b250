//! Integration tests for Layer 0: Foundation
//!
//! Tests for the Mapping trait implementations, errors, views and the
//! concurrent map.

mod errors;
mod mapping;
