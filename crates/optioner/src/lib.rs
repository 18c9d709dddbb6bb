//! Functional options generator for Rust structs.
//!
//! `optioner` reads a struct declaration and writes a module holding an option
//! type, an `option` dispatch method on the struct and one setter per field.
//! Every setter returns the option that reverts it, so a caller can apply a
//! temporary change and roll it back later:
//!
//! ```ignore
//! let previous = example.option([N(5)]);
//! // ...
//! example.option([previous]);
//! ```
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod generator;
pub mod utils;

pub use generator::{GenerateError, GeneratorConfig, generate};
