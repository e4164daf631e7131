//! The fixed vocabulary of JSON Schema instance types a field can declare.
//!
//! ```rust
//! use forerunner_core::primitive::PrimitiveType;
//!
//! assert_eq!(PrimitiveType::Integer.to_string(), "integer");
//! assert_eq!("number".parse::<PrimitiveType>().unwrap(), PrimitiveType::Number);
//! ```
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ForerunnerError;

/// Primitive JSON Schema types.
///
/// The `Display` implementation renders the canonical lowercase name, which
/// is exactly what ends up in the `type` key of a rendered property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl PrimitiveType {
    /// Canonical JSON Schema spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Number => "number",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Array => "array",
            PrimitiveType::Object => "object",
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveType {
    type Err = ForerunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(PrimitiveType::String),
            "integer" => Ok(PrimitiveType::Integer),
            "number" => Ok(PrimitiveType::Number),
            "boolean" => Ok(PrimitiveType::Boolean),
            "array" => Ok(PrimitiveType::Array),
            "object" => Ok(PrimitiveType::Object),
            other => Err(ForerunnerError::UnknownType(other.to_owned())),
        }
    }
}

impl From<PrimitiveType> for serde_json::Value {
    fn from(value: PrimitiveType) -> Self {
        serde_json::Value::String(value.as_str().to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_name() {
        for ty in [
            PrimitiveType::String,
            PrimitiveType::Integer,
            PrimitiveType::Number,
            PrimitiveType::Boolean,
            PrimitiveType::Array,
            PrimitiveType::Object,
        ] {
            let serialized = serde_json::to_value(ty).unwrap();
            assert_eq!(serialized, serde_json::Value::String(ty.to_string()));
            assert_eq!(ty.to_string().parse::<PrimitiveType>().unwrap(), ty);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "int".parse::<PrimitiveType>().unwrap_err();
        assert!(matches!(err, ForerunnerError::UnknownType(name) if name == "int"));
    }
}
