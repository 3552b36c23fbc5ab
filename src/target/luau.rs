//! Luau table types.

use super::Formatter;
use crate::converter::Declaration;
use crate::types::TypeRef;

pub static LUAU_FORMATTER: LuauFormatter = LuauFormatter;

const KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct LuauFormatter;

impl LuauFormatter {
    /// Table key for a field: bare when it is a plain identifier, otherwise
    /// the bracketed string form.
    pub fn field_key(name: &str) -> String {
        let mut chars = name.chars();
        let bare = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !KEYWORDS.contains(&name);

        if bare {
            name.to_string()
        } else {
            format!("[\"{}\"]", name.escape_default())
        }
    }
}

impl Formatter for LuauFormatter {
    fn name(&self) -> &'static str {
        "luau"
    }

    fn extension(&self) -> &'static str {
        "luau"
    }

    /// Types are always exported.
    fn supports_public(&self) -> bool {
        false
    }

    fn spell(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::String => "string".to_string(),
            TypeRef::Float | TypeRef::Integer => "number".to_string(),
            TypeRef::Boolean => "boolean".to_string(),
            TypeRef::Named(name) => name.clone(),
            TypeRef::List(element) => format!("{{ {} }}", self.spell(element)),
            TypeRef::Unknown => "unknown".to_string(),
        }
    }

    fn preamble(&self, _declarations: &[Declaration]) -> Option<String> {
        None
    }

    fn declaration(&self, declaration: &Declaration, _public: bool) -> String {
        let mut output = format!("export type {} = {{\n", declaration.name);
        for field in &declaration.fields {
            output.push_str(&format!(
                "    {}: {},\n",
                Self::field_key(&field.name),
                self.spell(&field.ty)
            ));
        }
        output.push('}');
        output
    }
}
