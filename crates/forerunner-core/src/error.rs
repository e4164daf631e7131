//! Unified error type exposed by **`forerunner-core`**.
//!
//! The builder itself never rejects a schema: contradictory or nonsensical
//! constraints are rendered verbatim. Errors only surface at the edges,
//! when a rendered document is written out as JSON or when a caller tries to
//! write through the read-only view of a [`StructSchema`].
//!
//! [`StructSchema`]: crate::schema::StructSchema

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ForerunnerError>;

#[derive(Debug, Error)]
pub enum ForerunnerError {
    /// A write or delete was attempted through the read-only mapping view of
    /// a defined schema.
    #[error("schema is immutable: cannot modify key `{key}`")]
    Immutable { key: String },

    /// Failure while rendering a schema document as a JSON string.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A primitive type name outside the JSON Schema vocabulary understood by
    /// the builder.
    #[error("unknown primitive type `{0}`")]
    UnknownType(String),

    /// Generic forwarding of an error raised by a vendor-format crate.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}
