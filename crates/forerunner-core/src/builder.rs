//! Builder for one object-level schema: the root document or any nested
//! object field.
//!
//! ```rust
//! use forerunner_core::builder::SchemaBuilder;
//! use serde_json::json;
//!
//! let mut builder = SchemaBuilder::new("Address");
//! builder.string("street").required();
//! builder.string("zip").pattern(r"^\d{5}$");
//!
//! assert_eq!(
//!     serde_json::Value::Object(builder.to_map()),
//!     json!({
//!         "type": "object",
//!         "properties": {
//!             "street": { "type": "string" },
//!             "zip": { "type": "string", "pattern": r"^\d{5}$" }
//!         },
//!         "required": ["street"],
//!         "additionalProperties": false
//!     })
//! );
//! ```
//!
//! Field order in the output follows declaration order. Re-declaring a name
//! replaces the earlier descriptor in place.

use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    error::Result,
    field::{non_empty, FieldDescriptor},
    primitive::PrimitiveType,
};

/// URI emitted by [`SchemaBuilder::default_schema_version`].
pub const DEFAULT_SCHEMA_VERSION: &str = "https://json-schema.org/draft/2020-12/schema";

/// Ordered collection of [`FieldDescriptor`]s plus object-level metadata.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    fields: IndexMap<String, FieldDescriptor>,
    required: IndexSet<String>,
    description: Option<String>,
    title: Option<String>,
    schema_version: Option<String>,
    additional_properties: bool,
    strict: bool,
}

impl SchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            required: IndexSet::new(),
            description: None,
            title: None,
            schema_version: None,
            additional_properties: false,
            strict: false,
        }
    }

    /// Label of this builder. Never rendered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a declared field.
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldDescriptor> {
        self.fields.get_mut(name)
    }

    /// Declare a field of an arbitrary primitive type.
    pub fn field(&mut self, name: impl Into<String>, ty: PrimitiveType) -> &mut FieldDescriptor {
        self.insert(FieldDescriptor::new(name, ty))
    }

    pub fn string(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.field(name, PrimitiveType::String)
    }

    pub fn int(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.field(name, PrimitiveType::Integer)
    }

    /// Alias of [`Self::int`].
    pub fn integer(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.int(name)
    }

    pub fn float(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.field(name, PrimitiveType::Number)
    }

    /// Alias of [`Self::float`].
    pub fn number(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.float(name)
    }

    pub fn boolean(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.field(name, PrimitiveType::Boolean)
    }

    /// Alias of [`Self::boolean`].
    pub fn bool(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.boolean(name)
    }

    pub fn array(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.field(name, PrimitiveType::Array)
    }

    pub fn email(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.string(name).format("email")
    }

    pub fn url(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.string(name).format("uri")
    }

    pub fn uuid(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.string(name).format("uuid")
    }

    pub fn datetime(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.string(name).format("date-time")
    }

    pub fn date(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.string(name).format("date")
    }

    pub fn time(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.string(name).format("time")
    }

    pub fn ipv4(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.string(name).format("ipv4")
    }

    pub fn ipv6(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.string(name).format("ipv6")
    }

    pub fn hostname(&mut self, name: impl Into<String>) -> &mut FieldDescriptor {
        self.string(name).format("hostname")
    }

    /// String field restricted to `values`.
    pub fn enumeration<I, V>(&mut self, name: impl Into<String>, values: I) -> &mut FieldDescriptor
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.string(name).enum_values(values)
    }

    /// Declare a nested object field.
    ///
    /// `configure` runs immediately against a fresh builder named after the
    /// field. The returned handle is the field descriptor, so the field
    /// itself can still be marked `required()` or `nullable(true)`.
    pub fn object<F>(&mut self, name: impl Into<String>, configure: F) -> &mut FieldDescriptor
    where
        F: FnOnce(&mut SchemaBuilder),
    {
        let name = name.into();
        let mut nested = SchemaBuilder::new(name.clone());
        configure(&mut nested);

        let mut field = FieldDescriptor::new(name, PrimitiveType::Object);
        field.set_nested_builder(nested);
        self.insert(field)
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn additional_properties(&mut self, allowed: bool) -> &mut Self {
        self.additional_properties = allowed;
        self
    }

    /// Emit a `$schema` key with the given dialect URI.
    pub fn schema_version(&mut self, uri: impl Into<String>) -> &mut Self {
        self.schema_version = Some(uri.into());
        self
    }

    /// Emit `$schema` pointing at JSON Schema 2020-12.
    pub fn default_schema_version(&mut self) -> &mut Self {
        self.schema_version(DEFAULT_SCHEMA_VERSION)
    }

    /// Disallow additional properties and mark every field declared **so
    /// far** as required.
    ///
    /// Fields declared afterwards keep their own required flag.
    pub fn strict(&mut self) -> &mut Self {
        self.additional_properties = false;
        self.strict = true;

        for field in self.fields.values_mut() {
            field.required();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(schema = %self.name, fields = self.fields.len(), "strict mode enabled");

        self
    }

    /// `true` once [`Self::strict`] was called, unless additional properties
    /// were allowed again afterwards.
    pub fn is_strict(&self) -> bool {
        self.strict && !self.additional_properties
    }

    /// Add `name` to the required list. Repeated calls are no-ops.
    pub fn mark_required(&mut self, name: impl Into<String>) -> &mut Self {
        self.required.insert(name.into());
        self
    }

    fn insert(&mut self, field: FieldDescriptor) -> &mut FieldDescriptor {
        let (index, _) = self.fields.insert_full(field.name().to_owned(), field);
        &mut self.fields[index]
    }

    /// Render the object schema.
    ///
    /// `required` lists names passed to [`Self::mark_required`] first, then
    /// every field flagged as required, without duplicates. It is omitted
    /// when empty. `additionalProperties` is always present.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut schema = Map::new();
        schema.insert("type".into(), Value::from(PrimitiveType::Object));
        schema.insert("properties".into(), Value::Object(Map::new()));

        if let Some(version) = non_empty(&self.schema_version) {
            schema.insert("$schema".into(), Value::from(version));
        }
        if let Some(title) = non_empty(&self.title) {
            schema.insert("title".into(), Value::from(title));
        }
        if let Some(description) = non_empty(&self.description) {
            schema.insert("description".into(), Value::from(description));
        }

        let mut properties = Map::new();
        let mut required = self.required.clone();
        for (name, field) in &self.fields {
            properties.insert(name.clone(), Value::Object(field.to_map()));
            if field.is_required() {
                required.insert(name.clone());
            }
        }
        schema.insert("properties".into(), Value::Object(properties));

        if !required.is_empty() {
            let required = required.into_iter().map(Value::String).collect();
            schema.insert("required".into(), Value::Array(required));
        }

        schema.insert(
            "additionalProperties".into(),
            Value::Bool(self.additional_properties),
        );

        schema
    }

    /// Pretty-printed JSON of [`Self::to_map`].
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_map())?)
    }
}

impl Serialize for SchemaBuilder {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}
