//! mapkit - Convenience operations over key-value maps
//!
//! This crate re-exports all layers of mapkit for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: mapkit_toolkit    — Insert/read/transform/interchange operations
//! Layer 0: mapkit_foundation — Mapping trait, errors, views, concurrent map
//! ```

pub use mapkit_foundation as foundation;
pub use mapkit_toolkit as toolkit;

pub use mapkit_foundation::{
    ConcurrentMap, ConcurrentView, Counter, DEFAULT_INCREMENT_SEED, Error, ErrorKind, Mapping,
    ReadOnlyView, Result,
};
pub use mapkit_toolkit::prelude;
