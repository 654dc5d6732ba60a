use indexmap::IndexMap;
use serde::Deserialize;

/// A reference or inline schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

/// The subset of JSON Schema the type inferencer consumes.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Schema {
    /// Raw `type` keyword. Kept as a string so unrecognized values degrade
    /// to the unknown type instead of failing the whole parse.
    #[serde(rename = "type")]
    pub schema_type: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(default)]
    pub required: Vec<String>,

    pub items: Option<Box<SchemaOrRef>>,
}
