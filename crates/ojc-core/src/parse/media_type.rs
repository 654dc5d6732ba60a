use serde::Deserialize;

use super::schema::SchemaOrRef;

/// A media type entry under `content`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaType {
    pub schema: Option<SchemaOrRef>,
}
