//! Convenience operations over any [`Mapping`].
//!
//! The operations are grouped into extension traits, each implemented for
//! every type that implements [`Mapping`]:
//! - [`MapInsert`] - Safe insertion, upserts, counters and merging
//! - [`MapRead`] - Lookups with defaults, snapshots and views
//! - [`MapTransform`] - Filtering, projection, inversion and ordering
//! - [`MapInterchange`] - JSON, query strings and concurrent copies
//!
//! Importing the [`prelude`] brings all four into scope.
//!
//! ```
//! use indexmap::IndexMap;
//! use mapkit_toolkit::prelude::*;
//!
//! let mut hits: IndexMap<&str, u32> = IndexMap::new();
//! hits.increment("home");
//! hits.increment("home");
//! hits.add_if_not_exists("about", 0);
//!
//! assert_eq!(hits.to_query_string(), "home=2&about=0");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod insert;
pub mod interchange;
pub mod query;
pub mod read;
pub mod transform;

pub use insert::MapInsert;
pub use interchange::{
    CodecConfig, InterchangeCodec, JsonCodec, MapInterchange, Members, from_json, from_json_with,
};
pub use mapkit_foundation::Mapping;
pub use read::{KeysForValue, KeysForValueIter, MapRead};
pub use transform::MapTransform;

/// All toolkit traits plus [`Mapping`].
pub mod prelude {
    pub use crate::insert::MapInsert;
    pub use crate::interchange::MapInterchange;
    pub use crate::read::MapRead;
    pub use crate::transform::MapTransform;
    pub use mapkit_foundation::Mapping;
}
