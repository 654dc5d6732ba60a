use log::warn;

use crate::ir::{OperationPlan, PlannedBody, PlannedParameter, TypeDescriptor};
use crate::parse::document::Document;
use crate::parse::operation::Operation;
use crate::parse::parameter::{Parameter, ParameterLocation, ParameterOrRef};
use crate::parse::path::HttpMethod;
use crate::parse::request_body::RequestBodyOrRef;
use crate::parse::response::ResponseOrRef;

use super::name_normalizer::{normalize, route_to_name};
use super::type_inference::TypeInferencer;

/// Flattens every path item in the document into operation plans, in
/// declaration order: paths as written, then methods as written within
/// each path.
pub fn plan_document(document: &Document) -> Vec<OperationPlan> {
    let inferencer = TypeInferencer::new(document);
    let mut plans = Vec::new();
    for (path, item) in &document.paths {
        for (method, operation) in &item.operations {
            plans.push(plan_operation(
                &inferencer,
                path,
                *method,
                &item.parameters,
                operation,
            ));
        }
    }
    plans
}

fn plan_operation(
    inferencer: &TypeInferencer<'_>,
    path: &str,
    method: HttpMethod,
    shared_parameters: &[ParameterOrRef],
    operation: &Operation,
) -> OperationPlan {
    let name = operation
        .operation_id
        .clone()
        .unwrap_or_else(|| route_to_name(method, path));

    let mut path_params = Vec::new();
    let mut query_params = Vec::new();
    let mut header_params = Vec::new();
    // Parameters declared on the path item apply to all of its operations
    // and come before the operation's own.
    for entry in shared_parameters.iter().chain(&operation.parameters) {
        let parameter = match entry {
            ParameterOrRef::Parameter(parameter) => parameter,
            ParameterOrRef::Ref { ref_path } => {
                warn!("parameter reference {ref_path} is not supported, skipping");
                continue;
            }
        };
        let planned = plan_parameter(inferencer, parameter);
        match parameter.location {
            ParameterLocation::Path => path_params.push(planned),
            ParameterLocation::Query => query_params.push(planned),
            ParameterLocation::Header => header_params.push(planned),
            ParameterLocation::Cookie => {}
        }
    }

    let body = match &operation.request_body {
        None => None,
        Some(RequestBodyOrRef::Ref { ref_path }) => {
            warn!("request body reference {ref_path} is not supported, skipping");
            None
        }
        Some(RequestBodyOrRef::RequestBody(request_body)) => {
            request_body
                .content
                .first()
                .map(|(content_type, media)| PlannedBody {
                    content_type: content_type.clone(),
                    body_type: inferencer.infer(media.schema.as_ref()),
                    required: request_body.required,
                })
        }
    };

    let success_type = match operation.responses.get("200") {
        Some(ResponseOrRef::Response(response)) => match response.content.first() {
            Some((_, media)) => inferencer.infer(media.schema.as_ref()),
            None => TypeDescriptor::Unknown,
        },
        Some(ResponseOrRef::Ref { ref_path }) => {
            warn!("response reference {ref_path} is not supported, emitting unknown");
            TypeDescriptor::Unknown
        }
        None => TypeDescriptor::Unknown,
    };

    OperationPlan {
        name,
        method,
        path: path.to_string(),
        summary: operation.summary.clone(),
        description: operation.description.clone(),
        path_params,
        query_params,
        header_params,
        body,
        success_type,
    }
}

fn plan_parameter(inferencer: &TypeInferencer<'_>, parameter: &Parameter) -> PlannedParameter {
    PlannedParameter {
        wire_name: parameter.name.clone(),
        ident: normalize(&parameter.name),
        param_type: inferencer.infer(parameter.schema.as_ref()),
        required: parameter.required,
        description: parameter.description.clone(),
    }
}
