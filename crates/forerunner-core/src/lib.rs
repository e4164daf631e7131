//! Fluent, in-memory builder for JSON Schema documents aimed at LLM
//! structured outputs.
//!
//! Three pieces, leaves first:
//!
//! * [`field::FieldDescriptor`] – one named property and its constraints.
//! * [`builder::SchemaBuilder`] – an object schema made of ordered fields,
//!   recursively nesting other builders for object-typed fields.
//! * [`schema::StructSchema`] – a named root builder with a cached render,
//!   wrapped in the `{ name, strict, schema }` envelope when strict.
//!
//! The builder is a structural compiler, not a validator: it never rejects a
//! combination of constraints.

pub mod builder;
pub mod error;
pub mod field;
pub mod primitive;
pub mod schema;

pub use builder::{SchemaBuilder, DEFAULT_SCHEMA_VERSION};
pub use error::{ForerunnerError, Result};
pub use field::FieldDescriptor;
pub use primitive::PrimitiveType;
pub use schema::StructSchema;
