use indexmap::IndexMap;
use log::warn;

use crate::parse::components::Components;
use crate::parse::document::Document;
use crate::parse::schema::{Schema, SchemaOrRef};

/// Outcome of resolving a schema node.
#[derive(Debug, PartialEq)]
pub enum Resolved<'a> {
    Schema(&'a Schema),
    /// The node was absent, or a reference could not be walked to a schema.
    Unknown,
}

/// Follows `$ref` pointers to their target schema node.
///
/// Resolution is lazy and recomputed per use; nothing is rewritten in the
/// document. A reference that cannot be walked degrades to
/// [`Resolved::Unknown`] with a diagnostic, never a fatal error.
pub struct SchemaResolver<'a> {
    document: &'a Document,
}

impl<'a> SchemaResolver<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Resolve a schema node, following reference-to-reference chains.
    /// A repeated reference within one chain is reported as circular and
    /// resolves to unknown.
    pub fn resolve<'n>(&'n self, node: Option<&'n SchemaOrRef>) -> Resolved<'n> {
        self.resolve_inner(node, &mut Vec::new())
    }

    fn resolve_inner<'n>(
        &'n self,
        node: Option<&'n SchemaOrRef>,
        visited: &mut Vec<String>,
    ) -> Resolved<'n> {
        match node {
            None => Resolved::Unknown,
            Some(SchemaOrRef::Schema(schema)) => Resolved::Schema(schema),
            Some(SchemaOrRef::Ref { ref_path }) => {
                if visited.iter().any(|seen| seen == ref_path) {
                    warn!("circular reference chain at {ref_path}, emitting unknown");
                    return Resolved::Unknown;
                }
                visited.push(ref_path.clone());
                match self.walk(ref_path) {
                    Some(target) => self.resolve_inner(Some(target), visited),
                    None => Resolved::Unknown,
                }
            }
        }
    }

    /// Walk the document from its root through each pointer segment.
    fn walk(&self, ref_path: &str) -> Option<&'a SchemaOrRef> {
        let mut cursor = Cursor::Document(self.document);
        for segment in ref_path.split('/').filter(|s| !s.is_empty() && *s != "#") {
            let next = match cursor {
                Cursor::Document(document) => match segment {
                    "components" => document.components.as_ref().map(Cursor::Components),
                    _ => None,
                },
                Cursor::Components(components) => match segment {
                    "schemas" => Some(Cursor::Map(&components.schemas)),
                    _ => None,
                },
                Cursor::Map(map) => map.get(segment).map(Cursor::Node),
                Cursor::Node(node) => step_into(node, segment),
            };
            match next {
                Some(found) => cursor = found,
                None => {
                    warn!("unresolved reference {ref_path}: no `{segment}` here, emitting unknown");
                    return None;
                }
            }
        }
        match cursor {
            Cursor::Node(node) => Some(node),
            _ => {
                warn!("unresolved reference {ref_path}: does not name a schema, emitting unknown");
                None
            }
        }
    }
}

/// Position of a partial walk through the document graph.
enum Cursor<'a> {
    Document(&'a Document),
    Components(&'a Components),
    Map(&'a IndexMap<String, SchemaOrRef>),
    Node(&'a SchemaOrRef),
}

fn step_into<'a>(node: &'a SchemaOrRef, segment: &str) -> Option<Cursor<'a>> {
    match node {
        SchemaOrRef::Schema(schema) => match segment {
            "properties" => Some(Cursor::Map(&schema.properties)),
            "items" => schema.items.as_deref().map(Cursor::Node),
            _ => None,
        },
        SchemaOrRef::Ref { .. } => None,
    }
}
