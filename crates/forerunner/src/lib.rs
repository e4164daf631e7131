//! # `forerunner` – The umbrella crate
//!
//! One import for the whole workspace:
//!
//! | Crate                   | What it provides                                                            |
//! |-------------------------|-----------------------------------------------------------------------------|
//! | **`forerunner-core`**   | `SchemaBuilder`, `FieldDescriptor`, `StructSchema`, errors                  |
//! | **`forerunner-openai`** | `response_format` / function-tool payloads built from a schema *(optional)* |
//!
//! The `openai` feature is on by default. `tracing` forwards to
//! `forerunner-core` and emits `debug`/`trace` events while schemas are
//! defined and rendered.
//!
//! ## Quick example
//!
//! ```rust
//! use forerunner::StructSchema;
//!
//! let schema = StructSchema::define("User", Some("A user object"), |user| {
//!     user.string("name").min_length(1).max_length(100).required();
//!     user.int("age").min(0).max(150);
//!     user.boolean("is_active").default_value(true);
//!     user.array("tags")
//!         .items(forerunner::PrimitiveType::String)
//!         .max_items(10);
//!     user.object("address", |address| {
//!         address.string("street").required();
//!         address.string("city").required();
//!     });
//!     user.strict();
//! });
//!
//! assert_eq!(schema["strict"], true);
//! assert_eq!(schema["schema"]["required"].as_array().unwrap().len(), 5);
//! println!("{}", schema.to_json().unwrap());
//! ```
#![doc(html_root_url = "https://docs.rs/forerunner/latest")]

pub use forerunner_core::*;

#[cfg(feature = "openai")]
pub use forerunner_openai as openai;
