use crate::error::{GenerateError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Top-level document as it appears on disk. Unknown keys are ignored and
/// the known ones stay untyped until classified, so a mistyped `title` or
/// `properties` degrades instead of failing the run.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct JsonSchema {
    #[serde(default)]
    pub title: Option<Value>,

    #[serde(default)]
    pub properties: Option<Value>,

    #[serde(default)]
    pub items: Option<Value>,
}

/// Primitive schema types. `decimal` is read as `Number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Number,
    Integer,
    Boolean,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectType {
    pub title: Option<String>,
    /// `None` when the descriptor carries no `properties` map.
    pub properties: Option<BTreeMap<String, PropertyType>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayType {
    /// `None` when `items` is absent or not a map.
    pub items: Option<Box<PropertyType>>,
}

/// One field descriptor, classified once at ingestion.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyType {
    Scalar(ScalarKind),
    Object(ObjectType),
    Array(ArrayType),
    Unknown,
}

/// Root of a schema tree: either object-shaped (`properties`) or
/// array-shaped (`items`). A node with neither declares nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    pub title: Option<String>,
    pub properties: Option<BTreeMap<String, PropertyType>>,
    pub items: Option<Box<PropertyType>>,
}

impl SchemaNode {
    pub fn from_json(json_schema: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json_schema)
            .map_err(|e| GenerateError::Parse(e.to_string()))?;
        Self::from_value(&value)
    }

    /// The root must be a JSON object; everything inside it is read leniently.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(GenerateError::Parse(
                "schema root must be a JSON object".to_string(),
            ));
        }
        let schema =
            JsonSchema::deserialize(value).map_err(|e| GenerateError::Parse(e.to_string()))?;
        Ok(Self::from(schema))
    }

    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, ty: PropertyType) -> Self {
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), ty);
        self
    }

    pub fn with_items(mut self, items: PropertyType) -> Self {
        self.items = Some(Box::new(items));
        self
    }
}

impl From<JsonSchema> for SchemaNode {
    fn from(schema: JsonSchema) -> Self {
        Self {
            title: schema.title.as_ref().and_then(Value::as_str).map(str::to_owned),
            properties: schema
                .properties
                .as_ref()
                .and_then(Value::as_object)
                .map(properties_from_map),
            items: schema
                .items
                .as_ref()
                .filter(|v| v.is_object())
                .map(|v| Box::new(PropertyType::from_value(v))),
        }
    }
}

impl PropertyType {
    /// Classify an untyped descriptor. Anything that does not match a known
    /// shape becomes `Unknown` instead of failing.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return PropertyType::Unknown;
        };

        let nested = map
            .get("properties")
            .and_then(Value::as_object)
            .map(properties_from_map);

        match map.get("type").and_then(Value::as_str) {
            Some("string") => PropertyType::Scalar(ScalarKind::String),
            Some("number") | Some("decimal") => PropertyType::Scalar(ScalarKind::Number),
            Some("integer") => PropertyType::Scalar(ScalarKind::Integer),
            Some("boolean") => PropertyType::Scalar(ScalarKind::Boolean),
            Some("object") => PropertyType::Object(ObjectType {
                title: title_of(map),
                properties: nested,
            }),
            Some("array") => PropertyType::Array(ArrayType {
                items: map
                    .get("items")
                    .filter(|v| v.is_object())
                    .map(|v| Box::new(PropertyType::from_value(v))),
            }),
            Some(_) => PropertyType::Unknown,
            // object shorthand: a bare `properties` map
            None if nested.is_some() => PropertyType::Object(ObjectType {
                title: title_of(map),
                properties: nested,
            }),
            None => PropertyType::Unknown,
        }
    }

    pub fn array_of(items: PropertyType) -> Self {
        PropertyType::Array(ArrayType {
            items: Some(Box::new(items)),
        })
    }
}

impl ObjectType {
    pub fn with_property(mut self, name: impl Into<String>, ty: PropertyType) -> Self {
        self.properties
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), ty);
        self
    }
}

fn title_of(map: &Map<String, Value>) -> Option<String> {
    map.get("title").and_then(Value::as_str).map(str::to_owned)
}

fn properties_from_map(map: &Map<String, Value>) -> BTreeMap<String, PropertyType> {
    map.iter()
        .map(|(name, value)| (name.clone(), PropertyType::from_value(value)))
        .collect()
}
