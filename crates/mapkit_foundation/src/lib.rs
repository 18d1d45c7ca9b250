//! Mapping abstraction, errors, views and concurrent maps for mapkit.
//!
//! This crate provides:
//! - [`Mapping`] - The trait every toolkit operation is written against
//! - [`Error`] - Error kinds raised by strict inserts, the codec and sorting
//! - [`ReadOnlyView`] - Non-mutating window onto a borrowed map
//! - [`ConcurrentMap`] - Thread-safe map with shared handles
//! - [`Counter`] - Integer values usable as tallies

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod concurrent;
pub mod counter;
pub mod error;
pub mod mapping;
pub mod view;

pub use concurrent::{ConcurrentMap, ConcurrentView};
pub use counter::{Counter, DEFAULT_INCREMENT_SEED};
pub use error::{Error, ErrorKind, Result};
pub use mapping::Mapping;
pub use view::ReadOnlyView;
