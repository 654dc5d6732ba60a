use indexmap::IndexMap;
use serde::Deserialize;

use super::components::Components;
use super::path::PathItem;
use super::server::Server;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Info {
    pub title: String,

    pub description: Option<String>,

    pub version: String,
}

/// Top-level OpenAPI 3.0 document.
///
/// Paths keep their declaration order; it decides the order of the
/// generated client methods.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub openapi: String,

    pub info: Info,

    #[serde(default)]
    pub servers: Vec<Server>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    pub components: Option<Components>,
}
