//! Plain Java classes.

use super::{Formatter, unique_idents};
use crate::converter::Declaration;
use crate::types::TypeRef;
use convert_case::{Case, Casing};

pub static JAVA_FORMATTER: JavaFormatter = JavaFormatter;

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "_",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaFormatter;

impl JavaFormatter {
    /// Field names that are already valid identifiers are kept verbatim;
    /// anything else is camelCased, and keywords get a trailing `_`.
    pub fn field_ident(name: &str) -> String {
        let mut ident = if is_identifier(name) {
            name.to_string()
        } else {
            name.to_case(Case::Camel)
        };
        ident.retain(|c| c.is_alphanumeric() || c == '_' || c == '$');
        if ident.is_empty() {
            ident.push_str("field");
        }
        if ident.starts_with(|c: char| c.is_ascii_digit()) {
            ident.insert(0, '_');
        }
        if KEYWORDS.contains(&ident.as_str()) {
            ident.push('_');
        }
        ident
    }

    /// Spell a list element; generics take boxed types.
    fn element(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Integer => "Integer".to_string(),
            TypeRef::Float => "Double".to_string(),
            TypeRef::Boolean => "Boolean".to_string(),
            other => self.spell(other),
        }
    }
}

impl Formatter for JavaFormatter {
    fn name(&self) -> &'static str {
        "java"
    }

    fn extension(&self) -> &'static str {
        "java"
    }

    fn supports_public(&self) -> bool {
        true
    }

    fn spell(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::String => "String".to_string(),
            TypeRef::Float => "double".to_string(),
            TypeRef::Integer => "int".to_string(),
            TypeRef::Boolean => "boolean".to_string(),
            TypeRef::Named(name) => name.clone(),
            TypeRef::List(element) => format!("List<{}>", self.element(element)),
            TypeRef::Unknown => "unknown".to_string(),
        }
    }

    fn preamble(&self, declarations: &[Declaration]) -> Option<String> {
        declarations
            .iter()
            .flat_map(|d| &d.fields)
            .any(|f| f.ty.has_list())
            .then(|| "import java.util.List;".to_string())
    }

    fn declaration(&self, declaration: &Declaration, public: bool) -> String {
        let vis = if public { "public " } else { "" };
        let mut output = format!("{}class {} {{\n", vis, declaration.name);
        let idents = unique_idents(declaration.fields.iter().map(|f| Self::field_ident(&f.name)));
        for (field, ident) in declaration.fields.iter().zip(idents) {
            output.push_str(&format!("    {}{} {};\n", vis, self.spell(&field.ty), ident));
        }
        output.push('}');
        output
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
