//! Target-neutral type references and the mapping from schema descriptors.

use crate::registry::derived_name;
use crate::schema::{PropertyType, ScalarKind};

/// A resolved field type, spelled later by each target's formatter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    String,
    Float,
    Integer,
    Boolean,
    /// Reference to a declaration by its derived name.
    Named(String),
    List(Box<TypeRef>),
    Unknown,
}

impl TypeRef {
    pub fn list_of(element: TypeRef) -> Self {
        TypeRef::List(Box::new(element))
    }

    /// True if `Unknown` appears anywhere in the type.
    pub fn has_unknown(&self) -> bool {
        match self {
            TypeRef::Unknown => true,
            TypeRef::List(element) => element.has_unknown(),
            _ => false,
        }
    }

    pub fn has_list(&self) -> bool {
        matches!(self, TypeRef::List(_))
    }
}

impl From<ScalarKind> for TypeRef {
    fn from(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::String => TypeRef::String,
            ScalarKind::Number => TypeRef::Float,
            ScalarKind::Integer => TypeRef::Integer,
            ScalarKind::Boolean => TypeRef::Boolean,
        }
    }
}

/// Map a descriptor to a type reference.
///
/// Objects resolve to the first word of their `title` and to `Unknown`
/// without one; arrays resolve their element through the same mapping,
/// with a missing `items` giving a list of `Unknown`.
pub fn resolve_type(ty: &PropertyType) -> TypeRef {
    match ty {
        PropertyType::Scalar(kind) => TypeRef::from(*kind),
        PropertyType::Object(obj) => obj
            .title
            .as_deref()
            .and_then(derived_name)
            .map(|name| TypeRef::Named(name.to_string()))
            .unwrap_or(TypeRef::Unknown),
        PropertyType::Array(arr) => {
            TypeRef::list_of(arr.items.as_deref().map(resolve_type).unwrap_or(TypeRef::Unknown))
        }
        PropertyType::Unknown => TypeRef::Unknown,
    }
}
