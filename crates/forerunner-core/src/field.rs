//! A single named property of an object schema.
//!
//! [`FieldDescriptor`]s are created by the typed constructors on
//! [`SchemaBuilder`] (`string`, `int`, `array`, `object`, …) and configured
//! through chained calls that mutate the descriptor in place:
//!
//! ```rust
//! use forerunner_core::builder::SchemaBuilder;
//! use serde_json::json;
//!
//! let mut builder = SchemaBuilder::new("User");
//! builder
//!     .string("name")
//!     .description("Display name")
//!     .min_length(1)
//!     .required();
//!
//! let field = builder.get("name").unwrap();
//! assert_eq!(
//!     serde_json::Value::Object(field.to_map()),
//!     json!({ "type": "string", "description": "Display name", "minLength": 1 })
//! );
//! ```
//!
//! The descriptor performs **no validation**. Setting `min_length` on an
//! integer or `pattern` on a boolean is accepted and rendered verbatim.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{builder::SchemaBuilder, error::Result, primitive::PrimitiveType};

/// Shape of the elements of an array field.
#[derive(Debug, Clone)]
enum Items {
    /// `{"type": T}`
    Primitive(PrimitiveType),
    /// Full object schema produced by a nested builder.
    Object(SchemaBuilder),
}

impl Items {
    fn to_value(&self) -> Value {
        match self {
            Items::Primitive(ty) => {
                let mut items = Map::new();
                items.insert("type".into(), Value::from(*ty));
                Value::Object(items)
            }
            Items::Object(builder) => Value::Object(builder.to_map()),
        }
    }
}

/// Constraints and metadata for one named property.
///
/// Every optional attribute stays absent from the rendered output until it
/// is explicitly set.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    ty: PrimitiveType,
    description: Option<String>,
    title: Option<String>,
    format: Option<String>,
    enum_values: Option<Vec<Value>>,
    default: Option<Value>,
    pattern: Option<String>,
    min_length: Option<i64>,
    max_length: Option<i64>,
    min_items: Option<i64>,
    max_items: Option<i64>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    unique_items: Option<bool>,
    items: Option<Items>,
    nested: Option<SchemaBuilder>,
    required: bool,
    nullable: bool,
}

impl FieldDescriptor {
    /// Create a bare descriptor. The type is fixed for the lifetime of the
    /// descriptor.
    pub fn new(name: impl Into<String>, ty: PrimitiveType) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
            title: None,
            format: None,
            enum_values: None,
            default: None,
            pattern: None,
            min_length: None,
            max_length: None,
            min_items: None,
            max_items: None,
            minimum: None,
            maximum: None,
            unique_items: None,
            items: None,
            nested: None,
            required: false,
            nullable: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primitive_type(&self) -> PrimitiveType {
        self.ty
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Mark this field as required.
    pub fn required(&mut self) -> &mut Self {
        self.required = true;
        self
    }

    /// Mark this field as optional.
    pub fn optional(&mut self) -> &mut Self {
        self.required = false;
        self
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Free-form format tag such as `email`, `uri` or `date-time`.
    pub fn format(&mut self, format: impl Into<String>) -> &mut Self {
        self.format = Some(format.into());
        self
    }

    /// Restrict the field to a list of literal values.
    ///
    /// An empty list is still emitted as `"enum": []`.
    pub fn enum_values<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set a default value.
    ///
    /// Presence is what counts: `false`, `0`, `""` and even `null` are
    /// emitted once set.
    pub fn default_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.default = Some(value.into());
        self
    }

    pub fn min_length(&mut self, length: i64) -> &mut Self {
        self.min_length = Some(length);
        self
    }

    pub fn max_length(&mut self, length: i64) -> &mut Self {
        self.max_length = Some(length);
        self
    }

    pub fn min_items(&mut self, count: i64) -> &mut Self {
        self.min_items = Some(count);
        self
    }

    pub fn max_items(&mut self, count: i64) -> &mut Self {
        self.max_items = Some(count);
        self
    }

    /// Lower bound for numeric fields, always rendered as a float.
    pub fn min(&mut self, value: impl Into<f64>) -> &mut Self {
        self.minimum = Some(value.into());
        self
    }

    /// Upper bound for numeric fields, always rendered as a float.
    pub fn max(&mut self, value: impl Into<f64>) -> &mut Self {
        self.maximum = Some(value.into());
        self
    }

    pub fn pattern(&mut self, regex: impl Into<String>) -> &mut Self {
        self.pattern = Some(regex.into());
        self
    }

    /// Emitted as soon as it is set, including `false`.
    pub fn unique_items(&mut self, unique: bool) -> &mut Self {
        self.unique_items = Some(unique);
        self
    }

    /// Allow `null` in addition to the declared type.
    pub fn nullable(&mut self, nullable: bool) -> &mut Self {
        self.nullable = nullable;
        self
    }

    /// Declare a primitive element type for an array field.
    ///
    /// `items(PrimitiveType::Object)` renders as a bare `{"type": "object"}`;
    /// use [`Self::object_items`] to describe the element shape.
    pub fn items(&mut self, ty: PrimitiveType) -> &mut Self {
        self.items = Some(Items::Primitive(ty));
        self
    }

    /// Describe array elements as objects.
    ///
    /// A fresh builder named `<field>_item` is handed to `configure`; its
    /// rendered schema becomes the `items` value.
    pub fn object_items<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut SchemaBuilder),
    {
        let mut nested = SchemaBuilder::new(format!("{}_item", self.name));
        configure(&mut nested);
        self.items = Some(Items::Object(nested));
        self
    }

    pub(crate) fn set_nested_builder(&mut self, builder: SchemaBuilder) {
        self.nested = Some(builder);
    }

    /// Render the property schema.
    ///
    /// Key order is stable: `type`, `title`, `description`, `format`, `enum`,
    /// nested object keys, `items`, `uniqueItems`, `default`, then the length,
    /// item-count, numeric bounds and `pattern`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut property = Map::new();

        let ty = Value::from(self.ty);
        if self.nullable {
            property.insert("type".into(), Value::Array(vec![ty, Value::from("null")]));
        } else {
            property.insert("type".into(), ty);
        }

        if let Some(title) = non_empty(&self.title) {
            property.insert("title".into(), Value::from(title));
        }
        if let Some(description) = non_empty(&self.description) {
            property.insert("description".into(), Value::from(description));
        }
        if let Some(format) = non_empty(&self.format) {
            property.insert("format".into(), Value::from(format));
        }
        if let Some(values) = &self.enum_values {
            property.insert("enum".into(), Value::Array(values.clone()));
        }

        if let Some(nested) = &self.nested {
            let mut nested = nested.to_map();
            // The `[T, "null"]` union wins over the nested `"type": "object"`.
            if self.nullable {
                nested.shift_remove("type");
            }
            property.extend(nested);
        }

        if let Some(items) = &self.items {
            property.insert("items".into(), items.to_value());
        }
        if let Some(unique) = self.unique_items {
            property.insert("uniqueItems".into(), Value::Bool(unique));
        }
        if let Some(default) = &self.default {
            property.insert("default".into(), default.clone());
        }

        let counts = [
            ("minLength", self.min_length),
            ("maxLength", self.max_length),
            ("minItems", self.min_items),
            ("maxItems", self.max_items),
        ];
        for (key, count) in counts {
            if let Some(count) = count {
                property.insert(key.into(), Value::from(count));
            }
        }
        if let Some(minimum) = self.minimum {
            property.insert("minimum".into(), Value::from(minimum));
        }
        if let Some(maximum) = self.maximum {
            property.insert("maximum".into(), Value::from(maximum));
        }
        if let Some(pattern) = &self.pattern {
            property.insert("pattern".into(), Value::from(pattern.as_str()));
        }

        property
    }

    /// Pretty-printed JSON of [`Self::to_map`].
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_map())?)
    }
}

impl Serialize for FieldDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
