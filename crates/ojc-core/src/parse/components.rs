use indexmap::IndexMap;
use serde::Deserialize;

use super::schema::SchemaOrRef;

/// Reusable definitions. Only the schema namespace participates in
/// reference resolution.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaOrRef>,
}
