//! Named, immutable schema definitions.
//!
//! [`StructSchema::define`] is the single entry point most callers need:
//!
//! ```rust
//! use forerunner_core::schema::StructSchema;
//!
//! let schema = StructSchema::define("User", Some("A user object"), |user| {
//!     user.string("name").min_length(1).required();
//!     user.int("age").min(0).max(150);
//! });
//!
//! assert_eq!(schema["type"], "object");
//! assert_eq!(schema["required"][0], "name");
//! ```
//!
//! When the root builder is put into strict mode the rendered document is
//! wrapped in the `{ name, description, strict, schema }` envelope expected
//! by OpenAI-style structured outputs; the root `description` moves from the
//! schema up into the envelope.
//!
//! Rendering happens once, on first access, and the result is cached for the
//! lifetime of the value.

use std::{ops::Index, sync::OnceLock};

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    builder::SchemaBuilder,
    error::{ForerunnerError, Result},
};

static NULL: Value = Value::Null;

/// A defined schema: a name plus one fully configured root builder.
#[derive(Debug)]
pub struct StructSchema {
    name: String,
    builder: SchemaBuilder,
    rendered: OnceLock<Map<String, Value>>,
}

impl StructSchema {
    /// Build the root [`SchemaBuilder`] and hand it to `configure`.
    ///
    /// `configure` runs exactly once, before `define` returns. A non-empty
    /// `description` is applied to the root builder before the callback
    /// runs, so the callback may still override it.
    pub fn define<F>(name: impl Into<String>, description: Option<&str>, configure: F) -> Self
    where
        F: FnOnce(&mut SchemaBuilder),
    {
        let name = name.into();
        let mut builder = SchemaBuilder::new(name.clone());

        if let Some(description) = description.filter(|description| !description.is_empty()) {
            builder.description(description);
        }

        configure(&mut builder);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            schema = %name,
            fields = builder.len(),
            strict = builder.is_strict(),
            "schema defined"
        );

        Self {
            name,
            builder,
            rendered: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only access to the root builder.
    pub fn builder(&self) -> &SchemaBuilder {
        &self.builder
    }

    /// Whether the rendered output is wrapped in the strict envelope.
    pub fn is_strict(&self) -> bool {
        self.builder.is_strict()
    }

    /// Rendered document, computed on first call and cached afterwards.
    pub fn to_map(&self) -> &Map<String, Value> {
        if let Some(rendered) = self.rendered.get() {
            #[cfg(feature = "tracing")]
            tracing::trace!(schema = %self.name, "reusing rendered schema");
            return rendered;
        }

        self.rendered.get_or_init(|| self.render())
    }

    /// Owned copy of the rendered document.
    pub fn to_value(&self) -> Value {
        Value::Object(self.to_map().clone())
    }

    /// Pretty-printed JSON of the rendered document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.to_map())?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.to_map().get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.to_map().contains_key(key)
    }

    /// Always fails: a defined schema cannot be written to.
    pub fn set(&self, key: impl Into<String>, _value: impl Into<Value>) -> Result<()> {
        Err(ForerunnerError::Immutable { key: key.into() })
    }

    /// Always fails: a defined schema cannot have keys removed.
    pub fn unset(&self, key: impl Into<String>) -> Result<()> {
        Err(ForerunnerError::Immutable { key: key.into() })
    }

    fn render(&self) -> Map<String, Value> {
        #[cfg(feature = "tracing")]
        tracing::trace!(schema = %self.name, "rendering schema");

        let mut document = self.builder.to_map();
        if !self.builder.is_strict() {
            return document;
        }

        let mut envelope = Map::new();
        envelope.insert("name".into(), Value::from(self.name.as_str()));
        if let Some(description) = document.shift_remove("description") {
            envelope.insert("description".into(), description);
        }
        envelope.insert("strict".into(), Value::Bool(true));
        envelope.insert("schema".into(), Value::Object(document));
        envelope
    }
}

/// Missing keys index to `Value::Null`, like indexing a `serde_json::Value`.
impl Index<&str> for StructSchema {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Serialize for StructSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use serde_json::json;

    #[test]
    fn define_runs_callback_once_before_returning() {
        let calls = Cell::new(0);
        let schema = StructSchema::define("User", None, |user| {
            calls.set(calls.get() + 1);
            user.string("name");
        });

        assert_eq!(calls.get(), 1);
        schema.to_map();
        schema.to_map();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn description_is_applied_to_root() {
        let schema = StructSchema::define("User", Some("A user"), |user| {
            user.string("name");
        });
        assert_eq!(schema["description"], json!("A user"));
        assert_eq!(schema["properties"]["name"], json!({ "type": "string" }));
    }

    #[test]
    fn empty_description_is_ignored() {
        let schema = StructSchema::define("User", Some(""), |_| {});
        assert!(!schema.contains_key("description"));
        assert_eq!(
            schema.to_value(),
            json!({ "type": "object", "properties": {}, "additionalProperties": false })
        );
    }

    #[test]
    fn callback_may_override_description() {
        let schema = StructSchema::define("User", Some("first"), |user| {
            user.description("second");
        });
        assert_eq!(schema["description"], json!("second"));
    }

    #[test]
    fn render_is_memoized() {
        let schema = StructSchema::define("User", None, |user| {
            user.string("name").required();
        });

        let first: *const Map<String, Value> = schema.to_map();
        let second: *const Map<String, Value> = schema.to_map();
        assert_eq!(first, second);
    }

    #[test]
    fn strict_root_is_wrapped_with_hoisted_description() {
        let schema = StructSchema::define("Contact", Some("Contact card"), |contact| {
            contact.uuid("id");
            contact.email("email");
            contact.strict();
        });

        assert!(schema.is_strict());
        assert_eq!(
            schema.to_value(),
            json!({
                "name": "Contact",
                "description": "Contact card",
                "strict": true,
                "schema": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "format": "uuid" },
                        "email": { "type": "string", "format": "email" }
                    },
                    "required": ["id", "email"],
                    "additionalProperties": false
                }
            })
        );
        let keys: Vec<&str> = schema.to_map().keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "description", "strict", "schema"]);
    }

    #[test]
    fn strict_root_without_description_has_no_description_key() {
        let schema = StructSchema::define("Id", None, |root| {
            root.int("id");
            root.strict();
        });
        assert!(!schema.contains_key("description"));
        assert_eq!(schema["schema"]["required"], json!(["id"]));
    }

    #[test]
    fn additional_properties_false_is_not_wrapped() {
        let schema = StructSchema::define("Loose", None, |root| {
            root.string("a");
            root.additional_properties(false);
        });
        assert!(!schema.is_strict());
        assert!(!schema.contains_key("strict"));
        assert_eq!(schema["type"], json!("object"));
    }

    #[test]
    fn writes_fail_as_immutable() {
        let schema = StructSchema::define("User", None, |user| {
            user.string("name");
        });

        let err = schema.set("type", "array").unwrap_err();
        assert!(matches!(err, ForerunnerError::Immutable { ref key } if key == "type"));
        let err = schema.unset("properties").unwrap_err();
        assert!(matches!(err, ForerunnerError::Immutable { ref key } if key == "properties"));
        assert_eq!(schema["type"], json!("object"));
    }

    #[test]
    fn missing_keys_index_to_null() {
        let schema = StructSchema::define("User", None, |_| {});
        assert_eq!(schema["strict"], Value::Null);
        assert_eq!(schema.get("strict"), None);
    }

    #[test]
    fn serializes_like_to_map() {
        let schema = StructSchema::define("User", Some("A user"), |user| {
            user.string("name").required();
            user.strict();
        });

        assert_eq!(serde_json::to_value(&schema).unwrap(), schema.to_value());
        let json = schema.to_json().unwrap();
        assert!(json.contains("\"strict\": true"));
        assert_eq!(serde_json::from_str::<Value>(&json).unwrap(), schema.to_value());
    }
}
