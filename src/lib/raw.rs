use super::container::Properties;
use super::error::DecodeError;
use serde::de::value::MapAccessDeserializer;
use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::marker::PhantomData;

/// A geometry object as read from the input, coordinates untouched.
#[derive(Deserialize, Debug, PartialEq)]
pub struct RawGeometry {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, deserialize_with = "raw_coordinates")]
    pub coordinates: Option<Value>,
}

/// Any GeoJSON object as read from the input. Nested geometries and
/// features are decoded structurally, their coordinates stay raw.
#[derive(Deserialize, Debug, PartialEq)]
pub struct RawContainer {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, deserialize_with = "raw_coordinates")]
    pub coordinates: Option<Value>,
    #[serde(default)]
    pub properties: Option<Properties>,
    #[serde(default, deserialize_with = "optional_object")]
    pub geometry: Option<RawGeometry>,
    #[serde(default, deserialize_with = "object_list")]
    pub features: Option<Vec<RawContainer>>,
}

/// A node that must be a JSON object, never the sequence form of its fields.
struct Object<T>(T);

struct ObjectVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
    type Value = Object<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a GeoJSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map)).map(Object)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Object<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ObjectVisitor(PhantomData))
    }
}

fn unwrap_objects<T>(objects: Vec<Object<T>>) -> Vec<T> {
    objects.into_iter().map(|Object(inner)| inner).collect()
}

fn optional_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Object<T>>::deserialize(deserializer)?.map(|Object(inner)| inner))
}

fn object_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<Object<T>>>::deserialize(deserializer)?.map(unwrap_objects))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// Only arrays (or null) are kept; their nesting is checked later.
fn raw_coordinates<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(array @ Value::Array(_)) => Ok(Some(array)),
        Some(other) => Err(D::Error::custom(format!(
            "coordinates must be an array, found {}",
            json_kind(&other)
        ))),
    }
}

pub fn from_slice(bytes: &[u8]) -> Result<RawContainer, DecodeError> {
    let Object(raw) = serde_json::from_slice(bytes)?;
    Ok(raw)
}

pub fn from_reader(reader: impl Read) -> Result<RawContainer, DecodeError> {
    let Object(raw) = serde_json::from_reader(reader)?;
    Ok(raw)
}

/// Reads either a single object or a top-level array of objects.
pub fn batch_from_slice(bytes: &[u8]) -> Result<Vec<RawContainer>, DecodeError> {
    match bytes.iter().find(|byte| !byte.is_ascii_whitespace()) {
        Some(b'[') => Ok(unwrap_objects(serde_json::from_slice(bytes)?)),
        _ => Ok(vec![from_slice(bytes)?]),
    }
}
