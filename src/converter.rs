use crate::error::{GenerateError, Result};
use crate::options::{DuplicatePolicy, GenerateOptions};
use crate::registry::{TypeNameRegistry, UNKNOWN, derived_name};
use crate::schema::{ObjectType, PropertyType, SchemaNode};
use crate::types::{TypeRef, resolve_type};
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// One named type with its fields in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name exactly as written in the schema.
    pub name: String,
    pub ty: TypeRef,
}

/// Result of walking one schema tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    /// Every nested or element type precedes the declarations that use it.
    pub declarations: Vec<Declaration>,
    pub registry: TypeNameRegistry,
}

impl Generation {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|d| d.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.name == name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SchemaConverter {
    options: GenerateOptions,
}

impl SchemaConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Walk `schema` depth-first and collect its declarations.
    ///
    /// Shape problems degrade to `unknown` types or to skipped nodes; the only
    /// failure is nesting deeper than the configured `max_depth`.
    pub fn convert(&self, schema: &SchemaNode) -> Result<Generation> {
        let mut walk = Walk {
            options: &self.options,
            registry: TypeNameRegistry::new(),
            declarations: Vec::new(),
        };
        walk.root(schema)?;

        Ok(Generation {
            declarations: walk.declarations,
            registry: walk.registry,
        })
    }
}

struct Walk<'a> {
    options: &'a GenerateOptions,
    registry: TypeNameRegistry,
    declarations: Vec<Declaration>,
}

impl Walk<'_> {
    fn root(&mut self, schema: &SchemaNode) -> Result<()> {
        let options = self.options;
        let name = options
            .root_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| schema.title.as_deref().and_then(derived_name));

        if let Some(properties) = &schema.properties {
            return self.object(name, properties, "$", 0);
        }

        if let Some(items) = &schema.items {
            // An array root becomes a wrapper with a single `items` field.
            if !self.admit(name) {
                return Ok(());
            }
            self.extract(items, "items", "$.items", 1)?;
            let field = Field {
                name: "items".to_string(),
                ty: TypeRef::list_of(field_type(items, "items")),
            };
            self.push(name.unwrap_or(UNKNOWN), vec![field], "$");
            return Ok(());
        }

        debug!("root has neither properties nor items, nothing to declare");
        Ok(())
    }

    /// Declare an object-shaped node after everything it references.
    fn object(
        &mut self,
        name: Option<&str>,
        properties: &BTreeMap<String, PropertyType>,
        path: &str,
        depth: usize,
    ) -> Result<()> {
        if !self.admit(name) {
            return Ok(());
        }

        for (field, ty) in properties {
            self.extract(ty, field, &format!("{path}.{field}"), depth + 1)?;
        }

        let fields = properties
            .iter()
            .map(|(field, ty)| Field {
                name: field.clone(),
                ty: field_type(ty, field),
            })
            .collect();
        self.push(name.unwrap_or(UNKNOWN), fields, path);
        Ok(())
    }

    /// Emit declarations for the object types reachable from one field.
    /// `depth` counts the object and array levels above `ty`; scalar leaves
    /// do not count.
    fn extract(&mut self, ty: &PropertyType, field: &str, path: &str, depth: usize) -> Result<()> {
        match ty {
            PropertyType::Object(obj) => {
                if let Some(properties) = &obj.properties {
                    self.check_depth(path, depth)?;
                    self.object(Some(object_name(obj, field)), properties, path, depth)?;
                }
            }
            PropertyType::Array(arr) => {
                self.check_depth(path, depth)?;
                if let Some(items) = &arr.items {
                    self.extract(items, field, &format!("{path}[]"), depth + 1)?;
                }
            }
            PropertyType::Scalar(_) | PropertyType::Unknown => {}
        }
        Ok(())
    }

    fn check_depth(&self, path: &str, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(GenerateError::DepthExceeded {
                path: path.to_string(),
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }

    /// Register a named node. Returns `false` when the node must not be
    /// declared because its name was already taken under `DuplicatePolicy::Skip`.
    fn admit(&mut self, name: Option<&str>) -> bool {
        let Some(name) = name else {
            return true;
        };
        if self.registry.register(name) {
            return true;
        }

        match self.options.duplicates {
            DuplicatePolicy::Emit => {
                warn!(name, "type name declared more than once");
                true
            }
            DuplicatePolicy::Skip => {
                debug!(name, "skipping repeated declaration");
                false
            }
        }
    }

    fn push(&mut self, name: &str, fields: Vec<Field>, path: &str) {
        for field in &fields {
            trace!(declaration = name, field = %field.name, ty = ?field.ty, "resolved field");
            if field.ty.has_unknown() {
                warn!(path, field = %field.name, "unresolvable type, emitting `unknown`");
            }
        }
        debug!(name, fields = fields.len(), "declared");
        self.declarations.push(Declaration {
            name: name.to_string(),
            fields,
        });
    }
}

/// Name of an extracted object: its title's first word, else the field name.
fn object_name<'a>(obj: &'a ObjectType, field: &'a str) -> &'a str {
    obj.title
        .as_deref()
        .and_then(derived_name)
        .or_else(|| derived_name(field))
        .unwrap_or(UNKNOWN)
}

/// The type a field is declared with. Objects that get their own declaration
/// are referenced by that declaration's name; everything else goes through
/// the plain mapping.
fn field_type(ty: &PropertyType, field: &str) -> TypeRef {
    match ty {
        PropertyType::Object(obj) if obj.properties.is_some() => {
            TypeRef::Named(object_name(obj, field).to_string())
        }
        PropertyType::Array(arr) => TypeRef::list_of(
            arr.items
                .as_deref()
                .map(|items| field_type(items, field))
                .unwrap_or(TypeRef::Unknown),
        ),
        _ => resolve_type(ty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ScalarKind;

    fn convert(json: &str) -> Generation {
        let schema = SchemaNode::from_json(json).unwrap();
        SchemaConverter::new().convert(&schema).unwrap()
    }

    fn field_names(decl: &Declaration) -> Vec<&str> {
        decl.fields.iter().map(|f| f.name.as_str()).collect()
    }

    const ORDER: &str = r#"{
        "title": "Order Root",
        "properties": {
            "id": { "type": "integer" },
            "lines": {
                "type": "array",
                "items": {
                    "type": "object",
                    "title": "Line Item",
                    "properties": {
                        "sku": { "type": "string" },
                        "qty": { "type": "integer" }
                    }
                }
            }
        }
    }"#;

    #[test]
    fn test_order_scenario() {
        let generation = convert(ORDER);
        assert_eq!(generation.names().collect::<Vec<_>>(), vec!["Line", "Order"]);

        let line = &generation.declarations[0];
        assert_eq!(field_names(line), vec!["qty", "sku"]);
        assert_eq!(line.fields[0].ty, TypeRef::Integer);
        assert_eq!(line.fields[1].ty, TypeRef::String);

        let order = &generation.declarations[1];
        assert_eq!(field_names(order), vec!["id", "lines"]);
        assert_eq!(order.fields[0].ty, TypeRef::Integer);
        assert_eq!(
            order.fields[1].ty,
            TypeRef::list_of(TypeRef::Named("Line".to_string()))
        );
    }

    #[test]
    fn test_registry_is_pre_order() {
        let generation = convert(ORDER);
        assert_eq!(generation.registry.names(), &["Order", "Line"]);
    }

    #[test]
    fn test_field_order_ignores_document_order() {
        let a = convert(r#"{ "title": "T", "properties": { "z": { "type": "string" }, "a": { "type": "string" }, "m": { "type": "string" } } }"#);
        let b = convert(r#"{ "title": "T", "properties": { "m": { "type": "string" }, "z": { "type": "string" }, "a": { "type": "string" } } }"#);
        assert_eq!(field_names(&a.declarations[0]), vec!["a", "m", "z"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_untitled_nested_object_takes_field_name() {
        let generation = convert(
            r#"{
                "title": "User",
                "properties": {
                    "address": {
                        "type": "object",
                        "properties": { "city": { "type": "string" } }
                    }
                }
            }"#,
        );
        assert_eq!(generation.names().collect::<Vec<_>>(), vec!["address", "User"]);
        let user = generation.get("User").unwrap();
        assert_eq!(user.fields[0].ty, TypeRef::Named("address".to_string()));
    }

    #[test]
    fn test_deep_nesting_declares_innermost_first() {
        let generation = convert(
            r#"{
                "title": "A",
                "properties": {
                    "b": {
                        "title": "B",
                        "properties": {
                            "c": { "type": "object", "title": "C thing", "properties": { "x": { "type": "boolean" } } }
                        }
                    },
                    "flag": { "type": "boolean" }
                }
            }"#,
        );
        assert_eq!(generation.names().collect::<Vec<_>>(), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_object_without_properties_is_not_extracted() {
        let generation = convert(
            r#"{ "title": "Root", "properties": { "meta": { "type": "object" }, "owner": { "type": "object", "title": "Person" } } }"#,
        );
        assert_eq!(generation.declarations.len(), 1);
        let root = &generation.declarations[0];
        assert_eq!(root.fields[0].ty, TypeRef::Unknown);
        assert_eq!(root.fields[1].ty, TypeRef::Named("Person".to_string()));
    }

    #[test]
    fn test_array_root() {
        let generation = convert(
            r#"{
                "title": "Tags List",
                "items": { "type": "object", "title": "Tag", "properties": { "label": { "type": "string" } } }
            }"#,
        );
        assert_eq!(generation.names().collect::<Vec<_>>(), vec!["Tag", "Tags"]);
        let tags = generation.get("Tags").unwrap();
        assert_eq!(field_names(tags), vec!["items"]);
        assert_eq!(tags.fields[0].ty, TypeRef::list_of(TypeRef::Named("Tag".to_string())));
    }

    #[test]
    fn test_empty_root_declares_nothing() {
        let generation = convert(r#"{ "title": "Nothing" }"#);
        assert!(generation.declarations.is_empty());
        assert!(generation.registry.is_empty());
    }

    #[test]
    fn test_untitled_root_is_unknown_and_unregistered() {
        let generation = convert(r#"{ "properties": { "a": { "type": "string" } } }"#);
        assert_eq!(generation.names().collect::<Vec<_>>(), vec!["unknown"]);
        assert!(generation.registry.is_empty());
    }

    #[test]
    fn test_root_name_override() {
        let schema = SchemaNode::from_json(ORDER).unwrap();
        let generation = SchemaConverter::with_options(GenerateOptions::new().root_name("Purchase"))
            .convert(&schema)
            .unwrap();
        assert_eq!(generation.names().collect::<Vec<_>>(), vec!["Line", "Purchase"]);
    }

    const SHARED: &str = r#"{
        "title": "Shipment",
        "properties": {
            "from": { "title": "Address", "properties": { "city": { "type": "string" } } },
            "to": { "title": "Address", "properties": { "city": { "type": "string" } } }
        }
    }"#;

    #[test]
    fn test_duplicates_emitted_by_default() {
        let generation = convert(SHARED);
        assert_eq!(
            generation.names().collect::<Vec<_>>(),
            vec!["Address", "Address", "Shipment"]
        );
    }

    #[test]
    fn test_duplicates_skipped_on_request() {
        let schema = SchemaNode::from_json(SHARED).unwrap();
        let generation = SchemaConverter::with_options(
            GenerateOptions::new().duplicates(DuplicatePolicy::Skip),
        )
        .convert(&schema)
        .unwrap();
        assert_eq!(generation.names().collect::<Vec<_>>(), vec!["Address", "Shipment"]);
        let shipment = generation.get("Shipment").unwrap();
        assert!(
            shipment
                .fields
                .iter()
                .all(|f| f.ty == TypeRef::Named("Address".to_string()))
        );
    }

    #[test]
    fn test_depth_limit() {
        let schema = SchemaNode::new("Root").with_property(
            "a",
            PropertyType::Object(ObjectType::default().with_property(
                "b",
                PropertyType::Object(
                    ObjectType::default().with_property("c", PropertyType::array_of(PropertyType::Unknown)),
                ),
            )),
        );

        let err = SchemaConverter::with_options(GenerateOptions::new().max_depth(2))
            .convert(&schema)
            .unwrap_err();
        match err {
            GenerateError::DepthExceeded { path, limit } => {
                assert_eq!(path, "$.a.b.c");
                assert_eq!(limit, 2);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(
            SchemaConverter::with_options(GenerateOptions::new().max_depth(4))
                .convert(&schema)
                .is_ok()
        );
    }

    #[test]
    fn test_depth_counts_only_object_and_array_levels() {
        let flat =
            SchemaNode::new("Flat").with_property("x", PropertyType::Scalar(ScalarKind::String));
        assert!(
            SchemaConverter::with_options(GenerateOptions::new().max_depth(0))
                .convert(&flat)
                .is_ok()
        );

        let nested = SchemaNode::new("Outer").with_property(
            "a",
            PropertyType::Object(
                ObjectType::default().with_property("x", PropertyType::Scalar(ScalarKind::String)),
            ),
        );
        let generation = SchemaConverter::with_options(GenerateOptions::new().max_depth(1))
            .convert(&nested)
            .unwrap();
        assert_eq!(generation.names().collect::<Vec<_>>(), vec!["a", "Outer"]);

        assert!(matches!(
            SchemaConverter::with_options(GenerateOptions::new().max_depth(0)).convert(&nested),
            Err(GenerateError::DepthExceeded { limit: 0, ref path }) if path == "$.a"
        ));
    }

    #[test]
    fn test_array_of_arrays_of_objects() {
        let generation = convert(
            r#"{
                "title": "Grid",
                "properties": {
                    "cells": { "type": "array", "items": { "type": "array", "items": { "type": "object", "properties": { "v": { "type": "number" } } } } }
                }
            }"#,
        );
        assert_eq!(generation.names().collect::<Vec<_>>(), vec!["cells", "Grid"]);
        assert_eq!(
            generation.get("Grid").unwrap().fields[0].ty,
            TypeRef::list_of(TypeRef::list_of(TypeRef::Named("cells".to_string())))
        );
    }
}
