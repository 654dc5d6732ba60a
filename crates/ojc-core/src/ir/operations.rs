use crate::parse::path::HttpMethod;

use super::types::TypeDescriptor;

/// A fully planned API operation, ready for emission.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// Canonical method name: `operationId` verbatim, or derived from the
    /// method token and route.
    pub name: String,
    pub method: HttpMethod,
    /// Path template as declared, `{placeholders}` included.
    pub path: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub path_params: Vec<PlannedParameter>,
    pub query_params: Vec<PlannedParameter>,
    pub header_params: Vec<PlannedParameter>,
    pub body: Option<PlannedBody>,
    /// Type of the 200 response's first content schema.
    pub success_type: TypeDescriptor,
}

/// A parameter bound for the path, query string, or headers.
#[derive(Debug, Clone)]
pub struct PlannedParameter {
    /// Name as it appears on the wire.
    pub wire_name: String,
    /// Normalized identifier used on the options object.
    pub ident: String,
    pub param_type: TypeDescriptor,
    pub required: bool,
    pub description: Option<String>,
}

/// A planned request body.
#[derive(Debug, Clone)]
pub struct PlannedBody {
    /// First declared content type, emitted as the Content-Type header.
    pub content_type: String,
    pub body_type: TypeDescriptor,
    pub required: bool,
}
