use forerunner_core::StructSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OpenAiError;

/// Payload of `response_format.json_schema`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchemaSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    pub schema: Value,
}

impl JsonSchemaSpec {
    pub fn new(name: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            description: None,
            strict: None,
            schema,
        }
    }
}

optional_setters!(JsonSchemaSpec {
    description: String,
    strict: bool,
});

/// A strict schema already renders as `{ name, description, strict, schema }`
/// and is unpacked as-is. Any other schema is sent whole, with its root
/// description copied up and `strict` left unset.
impl TryFrom<&StructSchema> for JsonSchemaSpec {
    type Error = OpenAiError;

    fn try_from(value: &StructSchema) -> Result<Self, Self::Error> {
        let description = value
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_owned);

        if !value.is_strict() {
            return Ok(Self {
                name: value.name().to_owned(),
                description,
                strict: None,
                schema: value.to_value(),
            });
        }

        let schema = value.get("schema").cloned().ok_or_else(|| {
            OpenAiError::Format(format!(
                "strict schema `{}` is missing its `schema` document",
                value.name()
            ))
        })?;

        Ok(Self {
            name: value.name().to_owned(),
            description,
            strict: Some(true),
            schema,
        })
    }
}

/// Value of the `response_format` request parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    Text,
    JsonObject,
    JsonSchema { json_schema: JsonSchemaSpec },
}

impl ResponseFormat {
    /// `{"type": "json_schema", "json_schema": {...}}` for a defined schema.
    pub fn json_schema(schema: &StructSchema) -> Result<Self, OpenAiError> {
        Ok(Self::JsonSchema {
            json_schema: schema.try_into()?,
        })
    }

    /// Ready to drop into a request body.
    pub fn to_value(&self) -> Result<Value, OpenAiError> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strict_schema_becomes_json_schema_format() {
        let schema = StructSchema::define("Weather", Some("Current weather"), |weather| {
            weather.string("city");
            weather.float("celsius");
            weather.strict();
        });

        let format = ResponseFormat::json_schema(&schema).unwrap();
        assert_eq!(
            format.to_value().unwrap(),
            json!({
                "type": "json_schema",
                "json_schema": {
                    "name": "Weather",
                    "description": "Current weather",
                    "strict": true,
                    "schema": {
                        "type": "object",
                        "properties": {
                            "city": { "type": "string" },
                            "celsius": { "type": "number" }
                        },
                        "required": ["city", "celsius"],
                        "additionalProperties": false
                    }
                }
            })
        );
    }

    #[test]
    fn relaxed_schema_is_sent_whole() {
        let schema = StructSchema::define("Note", Some("A note"), |note| {
            note.string("body").required();
        });

        let spec = JsonSchemaSpec::try_from(&schema).unwrap();
        assert_eq!(spec.name, "Note");
        assert_eq!(spec.description.as_deref(), Some("A note"));
        assert_eq!(spec.strict, None);
        assert_eq!(spec.schema, schema.to_value());
        assert!(serde_json::to_value(&spec).unwrap().get("strict").is_none());
    }

    #[test]
    fn simple_formats_carry_only_their_tag() {
        assert_eq!(
            ResponseFormat::Text.to_value().unwrap(),
            json!({ "type": "text" })
        );
        assert_eq!(
            ResponseFormat::JsonObject.to_value().unwrap(),
            json!({ "type": "json_object" })
        );
    }

    #[test]
    fn manual_spec_with_setters() {
        let spec = JsonSchemaSpec::new("Raw", json!({ "type": "object" }))
            .description("hand written")
            .strict(false);

        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({
                "name": "Raw",
                "description": "hand written",
                "strict": false,
                "schema": { "type": "object" }
            })
        );
    }

    #[test]
    fn round_trips_through_serde() {
        let format: ResponseFormat = serde_json::from_value(json!({
            "type": "json_schema",
            "json_schema": { "name": "X", "schema": { "type": "object" } }
        }))
        .unwrap();

        assert_eq!(
            format,
            ResponseFormat::JsonSchema {
                json_schema: JsonSchemaSpec::new("X", json!({ "type": "object" })),
            }
        );
    }
}
