//! Generate type declarations for Rust, Java and Luau from JSON Schema.
//!
//! A schema is ingested once into a [`SchemaNode`] tree, walked by the
//! [`SchemaConverter`] into an ordered list of declarations, and finally
//! spelled by the selected [`Target`]'s formatter.
//!
//! ```
//! use json_schema_to_types::{Target, generate};
//!
//! let schema = r#"{
//!     "title": "Order Root",
//!     "properties": {
//!         "id": { "type": "integer" },
//!         "lines": {
//!             "type": "array",
//!             "items": {
//!                 "type": "object",
//!                 "title": "Line Item",
//!                 "properties": { "sku": { "type": "string" } }
//!             }
//!         }
//!     }
//! }"#;
//!
//! let java = generate(schema, Target::Java).unwrap();
//! assert!(java.find("class Line").unwrap() < java.find("class Order").unwrap());
//! assert!(java.contains("List<Line> lines;"));
//! ```

pub mod converter;
pub mod error;
pub mod options;
pub mod registry;
pub mod schema;
pub mod target;
pub mod types;

pub use converter::{Declaration, Field, Generation, SchemaConverter};
pub use error::{GenerateError, Result};
pub use options::{DuplicatePolicy, GenerateOptions};
pub use registry::TypeNameRegistry;
pub use schema::{JsonSchema, PropertyType, ScalarKind, SchemaNode};
pub use target::{Formatter, Target};
pub use types::{TypeRef, resolve_type};

use std::path::Path;

/// Convert a JSON Schema string to declarations for `target`
pub fn generate(json_schema: &str, target: Target) -> Result<String> {
    generate_with_options(json_schema, target, &GenerateOptions::default())
}

/// Convert a JSON Schema string to declarations for `target` with custom options
pub fn generate_with_options(
    json_schema: &str,
    target: Target,
    options: &GenerateOptions,
) -> Result<String> {
    let schema = SchemaNode::from_json(json_schema)?;

    let converter = SchemaConverter::with_options(options.clone());
    let generation = converter.convert(&schema)?;
    Ok(render(&generation, target, options))
}

/// Spell an existing declaration list for `target`.
pub fn render(generation: &Generation, target: Target, options: &GenerateOptions) -> String {
    target
        .formatter()
        .format(&generation.declarations, options.public)
}

/// Read a schema file, convert it and write the result to `output_path`.
pub fn generate_from_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    target: Target,
    options: &GenerateOptions,
) -> Result<()> {
    let json_schema = std::fs::read_to_string(input_path)?;
    let code = generate_with_options(&json_schema, target, options)?;
    std::fs::write(output_path, code)?;
    Ok(())
}
