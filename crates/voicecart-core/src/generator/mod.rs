//! Content generator capability
//!
//! The assistant never classifies or composes text itself; it hands a prompt
//! and a response schema to an external generative service and works with the
//! schema-conforming JSON that comes back. The capability is modeled as a
//! trait so tests (and alternative providers) can substitute the live service.

pub mod gemini;

use crate::error::GenerationError;
use async_trait::async_trait;
use serde_json::{json, Map, Value};

pub use gemini::GeminiProvider;

/// External service mapping (prompt, schema) to schema-conforming JSON
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate a JSON value conforming to `schema` from `prompt`
    ///
    /// Implementations must either return a value of the requested shape or
    /// fail; they never return free-form text.
    async fn generate(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<Value, GenerationError>;
}

#[async_trait]
impl<T: ContentGenerator + ?Sized> ContentGenerator for std::sync::Arc<T> {
    async fn generate(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<Value, GenerationError> {
        (**self).generate(prompt, schema).await
    }
}

/// Closed set of response shapes a generator can be asked for
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaDescriptor {
    String,
    Number,
    /// String constrained to one of the listed values
    Enum(Vec<String>),
    Array(Box<SchemaDescriptor>),
    /// Object with named, typed properties
    Object(Vec<(String, SchemaDescriptor)>),
}

impl SchemaDescriptor {
    pub fn enumeration<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::Enum(values.into_iter().map(Into::into).collect())
    }

    pub fn array(items: SchemaDescriptor) -> Self {
        Self::Array(Box::new(items))
    }

    pub fn object<S: Into<String>>(
        properties: impl IntoIterator<Item = (S, SchemaDescriptor)>,
    ) -> Self {
        Self::Object(
            properties
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
        )
    }

    /// Render as a `responseSchema` value for the generateContent API
    pub fn to_value(&self) -> Value {
        match self {
            Self::String => json!({ "type": "STRING" }),
            Self::Number => json!({ "type": "NUMBER" }),
            Self::Enum(values) => json!({ "type": "STRING", "enum": values }),
            Self::Array(items) => json!({ "type": "ARRAY", "items": items.to_value() }),
            Self::Object(properties) => {
                let mut props = Map::new();
                for (name, schema) in properties {
                    props.insert(name.clone(), schema.to_value());
                }
                json!({ "type": "OBJECT", "properties": props })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_schema_rendering() {
        assert_eq!(SchemaDescriptor::String.to_value(), json!({"type": "STRING"}));
        assert_eq!(SchemaDescriptor::Number.to_value(), json!({"type": "NUMBER"}));
    }

    #[test]
    fn test_enum_schema_rendering() {
        let schema = SchemaDescriptor::enumeration(["add", "remove"]);
        assert_eq!(
            schema.to_value(),
            json!({"type": "STRING", "enum": ["add", "remove"]})
        );
    }

    #[test]
    fn test_array_schema_rendering() {
        let schema = SchemaDescriptor::array(SchemaDescriptor::String);
        assert_eq!(
            schema.to_value(),
            json!({"type": "ARRAY", "items": {"type": "STRING"}})
        );
    }

    #[test]
    fn test_object_schema_rendering() {
        let schema = SchemaDescriptor::object([
            ("item", SchemaDescriptor::String),
            ("quantity", SchemaDescriptor::Number),
        ]);
        let value = schema.to_value();
        assert_eq!(value["type"], "OBJECT");
        assert_eq!(value["properties"]["item"], json!({"type": "STRING"}));
        assert_eq!(value["properties"]["quantity"], json!({"type": "NUMBER"}));
    }

    #[test]
    fn test_nested_object_schema_rendering() {
        let schema = SchemaDescriptor::object([(
            "tags",
            SchemaDescriptor::array(SchemaDescriptor::String),
        )]);
        let value = schema.to_value();
        assert_eq!(
            value["properties"]["tags"],
            json!({"type": "ARRAY", "items": {"type": "STRING"}})
        );
    }
}
