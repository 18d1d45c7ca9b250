//! JSON interchange and interop conversions.
//!
//! A map is written as a JSON object: each key's `Display` text becomes a
//! member name and each value is serialized with `serde`. Reading goes the
//! other way through `FromStr` and `Deserialize`.
//!
//! The wire format lives behind [`InterchangeCodec`]; [`JsonCodec`] is the
//! implementation used by the convenience methods.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use serde_json::{Map, Value};

use mapkit_foundation::{ConcurrentMap, Error, Mapping, Result};

use crate::query;

/// Members of an interchange object, in output order.
pub type Members = Map<String, Value>;

/// Settings for [`JsonCodec`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Indent nested members instead of writing everything on one line.
    pub pretty: bool,

    /// Spaces per indentation level when `pretty` is set.
    pub indent: usize,

    /// Emit members sorted by name rather than in map iteration order.
    pub sort_keys: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            sort_keys: false,
        }
    }
}

impl CodecConfig {
    /// Compact single-line output.
    #[must_use]
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented output with two spaces per level.
    #[must_use]
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// Deterministic output: compact with members sorted by name.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            sort_keys: true,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable indentation.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Builder method to set the indentation width.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Builder method to enable/disable member sorting.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}

/// Text interchange format for string-keyed objects.
pub trait InterchangeCodec {
    /// Writes an object to text.
    ///
    /// # Errors
    ///
    /// Returns an encode error if the writer fails.
    fn encode_object(&self, members: Members) -> Result<String>;

    /// Reads text that must hold a single object.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed text and a type mismatch when the
    /// top-level value is not an object.
    fn decode_object(&self, text: &str) -> Result<Members>;
}

/// JSON implementation of [`InterchangeCodec`].
#[derive(Clone, Debug, Default)]
pub struct JsonCodec {
    config: CodecConfig,
}

impl JsonCodec {
    /// Creates a codec with the given settings.
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Returns the codec settings.
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn write<F: Formatter>(members: &Members, formatter: F) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        members
            .serialize(&mut ser)
            .map_err(|e| Error::encode(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| Error::encode(e.to_string()))
    }
}

impl InterchangeCodec for JsonCodec {
    fn encode_object(&self, mut members: Members) -> Result<String> {
        if self.config.sort_keys {
            members.sort_keys();
        }
        if self.config.pretty {
            let indent = " ".repeat(self.config.indent);
            Self::write(&members, PrettyFormatter::with_indent(indent.as_bytes()))
        } else {
            Self::write(&members, CompactFormatter)
        }
    }

    fn decode_object(&self, text: &str) -> Result<Members> {
        match serde_json::from_str::<Value>(text).map_err(classify::<Value>)? {
            Value::Object(members) => Ok(members),
            other => Err(Error::type_mismatch("object", describe(&other))),
        }
    }
}

/// Maps a `serde_json` failure onto the mapkit error taxonomy.
///
/// Syntax and end-of-input failures are parse errors; failures to fit
/// well-formed data into `T` are type mismatches.
fn classify<T: ?Sized>(err: serde_json::Error) -> Error {
    use serde_json::error::Category;

    match err.classify() {
        Category::Syntax | Category::Eof | Category::Io => {
            Error::parse(err.to_string(), err.line(), err.column())
        }
        Category::Data => Error::type_mismatch(std::any::type_name::<T>(), err.to_string()),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decodes a map from JSON using the default codec.
///
/// # Errors
///
/// Returns a parse error for malformed text, and a type mismatch when the
/// text is not an object, a member name does not parse as `K`, or a member
/// value does not deserialize as `V`.
pub fn from_json<M>(text: &str) -> Result<M>
where
    M: Mapping + Default,
    M::Key: FromStr,
    M::Value: DeserializeOwned,
{
    from_json_with(&JsonCodec::default(), text)
}

/// Decodes a map from text using `codec`.
///
/// # Errors
///
/// See [`from_json`].
pub fn from_json_with<M, C>(codec: &C, text: &str) -> Result<M>
where
    M: Mapping + Default,
    M::Key: FromStr,
    M::Value: DeserializeOwned,
    C: InterchangeCodec + ?Sized,
{
    let decoded = codec.decode_object(text).and_then(|members| {
        let mut out = M::default();
        for (name, value) in members {
            let Ok(key) = name.parse::<M::Key>() else {
                return Err(Error::type_mismatch(
                    std::any::type_name::<M::Key>(),
                    format!("member name {name:?}"),
                ));
            };
            let value = serde_json::from_value(value).map_err(classify::<M::Value>)?;
            out.insert(key, value);
        }
        Ok(out)
    });
    if let Err(err) = &decoded {
        tracing::debug!(error = %err, "failed to decode map");
    }
    decoded
}

/// Interchange and interop operations, available on every [`Mapping`].
pub trait MapInterchange: Mapping {
    /// Encodes the map as a compact JSON object.
    ///
    /// # Errors
    ///
    /// Returns an encode error if a value cannot be represented in JSON.
    fn to_json(&self) -> Result<String>
    where
        Self::Key: fmt::Display,
        Self::Value: Serialize,
    {
        self.to_json_with(&JsonCodec::default())
    }

    /// Encodes the map as an indented JSON object.
    ///
    /// # Errors
    ///
    /// See [`to_json`](Self::to_json).
    fn to_json_pretty(&self) -> Result<String>
    where
        Self::Key: fmt::Display,
        Self::Value: Serialize,
    {
        self.to_json_with(&JsonCodec::new(CodecConfig::pretty()))
    }

    /// Encodes the map with `codec`.
    ///
    /// Keys whose text forms collide keep the later value.
    ///
    /// # Errors
    ///
    /// See [`to_json`](Self::to_json).
    fn to_json_with<C>(&self, codec: &C) -> Result<String>
    where
        C: InterchangeCodec + ?Sized,
        Self::Key: fmt::Display,
        Self::Value: Serialize,
    {
        let mut members = Members::new();
        for (k, v) in self.iter() {
            let value = serde_json::to_value(v).map_err(|e| Error::encode(e.to_string()))?;
            members.insert(k.to_string(), value);
        }
        codec.encode_object(members)
    }

    /// Decodes a map of this type from JSON.
    ///
    /// # Errors
    ///
    /// See [`from_json`].
    fn from_json(text: &str) -> Result<Self>
    where
        Self: Sized + Default,
        Self::Key: FromStr,
        Self::Value: DeserializeOwned,
    {
        from_json(text)
    }

    /// Copies the map by pushing every value through the JSON data model.
    ///
    /// Each value is serialized and deserialized into a fresh instance, so
    /// no state is shared with the original, not even through `Rc`/`Arc`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnsupportedValueType`](mapkit_foundation::ErrorKind::UnsupportedValueType)
    /// if a value cannot make the round trip.
    fn deep_copy_via_codec(&self) -> Result<Self>
    where
        Self: Sized + Default,
        Self::Key: Clone,
        Self::Value: Serialize + DeserializeOwned,
    {
        let mut out = Self::default();
        for (k, v) in self.iter() {
            let copied = serde_json::to_value(v)
                .and_then(serde_json::from_value::<Self::Value>)
                .map_err(|e| Error::unsupported_value_type::<Self::Value>(e.to_string()))?;
            out.insert(k.clone(), copied);
        }
        Ok(out)
    }

    /// Builds `key=value` pairs joined by `&`, percent-encoding both sides.
    fn to_query_string(&self) -> String
    where
        Self::Key: fmt::Display,
        Self::Value: fmt::Display,
    {
        query::encode_pairs(self.iter())
    }

    /// Copies every pair into a new thread-safe map.
    ///
    /// The copy is independent: later changes to `self` are not reflected.
    fn to_concurrent_map(&self) -> ConcurrentMap<Self::Key, Self::Value>
    where
        Self::Key: Eq + Hash + Clone,
        Self::Value: Clone,
    {
        ConcurrentMap::from_mapping(self)
    }
}

impl<M: Mapping + ?Sized> MapInterchange for M {}
