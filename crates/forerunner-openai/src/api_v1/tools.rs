use forerunner_core::StructSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OpenAiError;

use super::JsonSchemaSpec;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToolSpec {
    pub r#type: ToolType,
    pub function: ToolFunctionSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolType {
    Function,
}

/// Function-calling tool definition; `parameters` is an object schema.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ToolFunctionSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

impl ToolFunctionSpec {
    pub fn new(name: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: None,
            parameters,
            strict: None,
        }
    }
}

optional_setters!(ToolFunctionSpec {
    description: String,
    strict: bool,
});

impl From<ToolFunctionSpec> for ToolSpec {
    fn from(function: ToolFunctionSpec) -> Self {
        Self {
            r#type: ToolType::Function,
            function,
        }
    }
}

impl From<JsonSchemaSpec> for ToolFunctionSpec {
    fn from(value: JsonSchemaSpec) -> Self {
        Self {
            name: value.name,
            description: value.description,
            parameters: value.schema,
            strict: value.strict,
        }
    }
}

/// The schema name becomes the function name and its root object the
/// parameter schema.
impl TryFrom<&StructSchema> for ToolSpec {
    type Error = OpenAiError;

    fn try_from(value: &StructSchema) -> Result<Self, Self::Error> {
        let spec = JsonSchemaSpec::try_from(value)?;
        Ok(ToolFunctionSpec::from(spec).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strict_schema_becomes_strict_tool() {
        let schema = StructSchema::define("get_weather", Some("Look up the weather"), |args| {
            args.string("city").description("City name");
            args.enumeration("unit", ["celsius", "fahrenheit"]);
            args.strict();
        });

        let tool = ToolSpec::try_from(&schema).unwrap();
        assert_eq!(
            serde_json::to_value(&tool).unwrap(),
            json!({
                "type": "function",
                "function": {
                    "name": "get_weather",
                    "description": "Look up the weather",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "city": { "type": "string", "description": "City name" },
                            "unit": { "type": "string", "enum": ["celsius", "fahrenheit"] }
                        },
                        "required": ["city", "unit"],
                        "additionalProperties": false
                    },
                    "strict": true
                }
            })
        );
    }

    #[test]
    fn relaxed_schema_keeps_description_in_parameters() {
        let schema = StructSchema::define("search", Some("Full text search"), |args| {
            args.string("query").required();
            args.int("limit").default_value(10);
        });

        let tool = ToolSpec::try_from(&schema).unwrap();
        assert_eq!(tool.function.strict, None);
        assert_eq!(tool.function.description.as_deref(), Some("Full text search"));
        assert_eq!(tool.function.parameters["description"], json!("Full text search"));
        assert_eq!(tool.function.parameters["required"], json!(["query"]));
    }

    #[test]
    fn manual_tool() {
        let tool: ToolSpec = ToolFunctionSpec::new("noop", json!({ "type": "object" }))
            .strict(true)
            .into();

        assert_eq!(tool.r#type, ToolType::Function);
        assert_eq!(tool.function.strict, Some(true));
        assert!(tool.function.description.is_none());
    }
}
