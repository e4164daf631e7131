#[macro_use]
mod common;
mod response_format;
mod tools;

pub use response_format::*;
pub use tools::*;
