use log::warn;

use crate::ir::{FieldDescriptor, TypeDescriptor};
use crate::parse::document::Document;
use crate::parse::schema::{Schema, SchemaOrRef};

use super::schema_resolver::{Resolved, SchemaResolver};

/// Derives structural type descriptors from schema nodes.
///
/// References are resolved through the document before inference. A
/// reference that reappears while its own expansion is still in progress
/// is cyclic; it degrades to the unknown type with a diagnostic instead of
/// recursing unbounded.
pub struct TypeInferencer<'a> {
    resolver: SchemaResolver<'a>,
}

impl<'a> TypeInferencer<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            resolver: SchemaResolver::new(document),
        }
    }

    /// Infer the type of a schema node. An absent node is unknown.
    pub fn infer<'n>(&'n self, node: Option<&'n SchemaOrRef>) -> TypeDescriptor {
        self.infer_guarded(node, &mut Vec::new())
    }

    fn infer_guarded<'n>(
        &'n self,
        node: Option<&'n SchemaOrRef>,
        in_flight: &mut Vec<String>,
    ) -> TypeDescriptor {
        match node {
            None => TypeDescriptor::Unknown,
            Some(SchemaOrRef::Schema(schema)) => self.infer_schema(schema, in_flight),
            Some(node @ SchemaOrRef::Ref { ref_path }) => {
                if in_flight.iter().any(|seen| seen == ref_path) {
                    warn!("cyclic schema reference {ref_path}, emitting unknown");
                    return TypeDescriptor::Unknown;
                }
                in_flight.push(ref_path.clone());
                let descriptor = match self.resolver.resolve(Some(node)) {
                    Resolved::Schema(schema) => self.infer_schema(schema, in_flight),
                    Resolved::Unknown => TypeDescriptor::Unknown,
                };
                in_flight.pop();
                descriptor
            }
        }
    }

    fn infer_schema<'n>(&'n self, schema: &'n Schema, in_flight: &mut Vec<String>) -> TypeDescriptor {
        match schema.schema_type.as_deref() {
            Some("string") => TypeDescriptor::String,
            Some("integer" | "number") => TypeDescriptor::Number,
            Some("boolean") => TypeDescriptor::Boolean,
            Some("null") => TypeDescriptor::Null,
            Some("array") => {
                let inner = self.infer_guarded(schema.items.as_deref(), in_flight);
                TypeDescriptor::Array(Box::new(inner))
            }
            Some("object") => self.infer_object(schema, in_flight),
            None if !schema.properties.is_empty() => self.infer_object(schema, in_flight),
            _ => TypeDescriptor::Unknown,
        }
    }

    fn infer_object<'n>(&'n self, schema: &'n Schema, in_flight: &mut Vec<String>) -> TypeDescriptor {
        if schema.properties.is_empty() {
            return TypeDescriptor::AnyObject;
        }
        let fields = schema
            .properties
            .iter()
            .map(|(name, prop)| FieldDescriptor {
                name: name.clone(),
                field_type: self.infer_guarded(Some(prop), in_flight),
                required: schema.required.contains(name),
            })
            .collect();
        TypeDescriptor::Object(fields)
    }
}
