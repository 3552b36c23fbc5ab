//! Rust structs with serde derives.

use super::{Formatter, unique_idents};
use crate::converter::Declaration;
use crate::types::TypeRef;
use convert_case::{Case, Casing};

pub static RUST_FORMATTER: RustFormatter = RustFormatter;

const PREAMBLE: &str = "use serde::{Deserialize, Serialize};";
const DERIVE: &str = "#[derive(Debug, Serialize, Deserialize)]";

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super", "Self"];

#[derive(Debug, Clone, Copy, Default)]
pub struct RustFormatter;

impl RustFormatter {
    /// snake_case identifier for a schema field name.
    pub fn field_ident(name: &str) -> String {
        let mut ident = name.to_case(Case::Snake);
        if ident.is_empty() {
            ident.push_str("field");
        }
        if ident.starts_with(|c: char| c.is_ascii_digit()) {
            ident.insert(0, '_');
        }

        if RESERVED.contains(&ident.as_str()) {
            ident.push('_');
        } else if KEYWORDS.contains(&ident.as_str()) {
            ident.insert_str(0, "r#");
        }
        ident
    }
}

impl Formatter for RustFormatter {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn extension(&self) -> &'static str {
        "rs"
    }

    fn supports_public(&self) -> bool {
        true
    }

    fn spell(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::String => "String".to_string(),
            TypeRef::Float => "f64".to_string(),
            TypeRef::Integer => "i64".to_string(),
            TypeRef::Boolean => "bool".to_string(),
            TypeRef::Named(name) => name.clone(),
            TypeRef::List(element) => format!("Vec<{}>", self.spell(element)),
            TypeRef::Unknown => "unknown".to_string(),
        }
    }

    fn preamble(&self, _declarations: &[Declaration]) -> Option<String> {
        Some(PREAMBLE.to_string())
    }

    fn declaration(&self, declaration: &Declaration, public: bool) -> String {
        let vis = if public { "pub " } else { "" };
        let mut output = String::new();

        output.push_str(DERIVE);
        output.push('\n');
        output.push_str(&format!("{}struct {} {{\n", vis, declaration.name));
        // snake_case can fold distinct schema names together
        let idents = unique_idents(declaration.fields.iter().map(|f| Self::field_ident(&f.name)));
        for (field, ident) in declaration.fields.iter().zip(idents) {
            output.push_str(&format!("    #[serde(rename = \"{}\")]\n", field.name.escape_default()));
            output.push_str(&format!("    {}{}: {},\n", vis, ident, self.spell(&field.ty)));
        }
        output.push('}');
        output
    }
}
