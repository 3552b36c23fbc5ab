//! Target languages and their formatters.
//!
//! The declaration list is the same for every target; a [`Formatter`] only
//! decides how types, declarations and decorations are spelled.

pub mod java;
pub mod luau;
pub mod rust;

use crate::converter::Declaration;
use crate::error::GenerateError;
use crate::schema::PropertyType;
use crate::types::{TypeRef, resolve_type};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub use java::JavaFormatter;
pub use luau::LuauFormatter;
pub use rust::RustFormatter;

/// Spelling rules for one target language.
pub trait Formatter: Send + Sync {
    /// Identifier used to select the target (e.g. "rust").
    fn name(&self) -> &'static str;

    /// File extension for generated code.
    fn extension(&self) -> &'static str;

    /// Whether `public` changes the output.
    fn supports_public(&self) -> bool;

    /// Spell a resolved type.
    fn spell(&self, ty: &TypeRef) -> String;

    /// Module-level text placed before the first declaration, if any.
    fn preamble(&self, declarations: &[Declaration]) -> Option<String>;

    /// One declaration block, without trailing newline.
    fn declaration(&self, declaration: &Declaration, public: bool) -> String;

    fn format(&self, declarations: &[Declaration], public: bool) -> String {
        if declarations.is_empty() {
            return String::new();
        }

        let mut blocks = Vec::with_capacity(declarations.len() + 1);
        if let Some(preamble) = self.preamble(declarations) {
            blocks.push(preamble);
        }
        blocks.extend(declarations.iter().map(|d| self.declaration(d, public)));

        let mut output = blocks.join("\n\n");
        output.push('\n');
        output
    }
}

/// Make identifiers unique within one declaration by suffixing repeats
/// with `_2`, `_3`, ... in order of appearance.
pub fn unique_idents(idents: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut used = HashSet::new();
    idents
        .into_iter()
        .map(|ident| {
            let mut candidate = ident.clone();
            let mut n = 2;
            while !used.insert(candidate.clone()) {
                candidate = format!("{ident}_{n}");
                n += 1;
            }
            candidate
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Rust,
    Java,
    Luau,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Rust, Target::Java, Target::Luau];

    pub fn formatter(self) -> &'static dyn Formatter {
        match self {
            Target::Rust => &rust::RUST_FORMATTER,
            Target::Java => &java::JAVA_FORMATTER,
            Target::Luau => &luau::LUAU_FORMATTER,
        }
    }

    pub fn name(self) -> &'static str {
        self.formatter().name()
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.name()).collect()
    }

    /// The target's token for a single descriptor.
    pub fn type_token(self, ty: &PropertyType) -> String {
        self.formatter().spell(&resolve_type(ty))
    }
}

impl FromStr for Target {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GenerateError::UnsupportedTarget(s.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
