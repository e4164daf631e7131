//! OpenAI request fragments derived from a [`StructSchema`].
//!
//! The crate performs no HTTP: it only shapes a defined schema into the JSON
//! a chat-completions or responses request expects under `response_format`
//! or `tools`.
//!
//! [`StructSchema`]: forerunner_core::StructSchema
pub mod api_v1;
pub mod error;

pub use api_v1::{JsonSchemaSpec, ResponseFormat, ToolFunctionSpec, ToolSpec, ToolType};
pub use error::OpenAiError;
