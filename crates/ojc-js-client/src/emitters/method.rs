use minijinja::{Value, context};
use ojc_core::ir::{OperationPlan, PlannedBody, PlannedParameter, TypeDescriptor};
use ojc_core::transform::name_normalizer::normalize;

use super::escape_jsdoc;
use crate::type_mapper::descriptor_to_doc;

/// Build the template context for one generated client method: the
/// assignment target, the JSDoc lines, and the body statements. Lines
/// carry their own nesting so the template only adds block indentation.
pub fn build_method_context(plan: &OperationPlan) -> Value {
    context! {
        accessor => accessor_for(&plan.name),
        doc_lines => doc_lines(plan),
        body_lines => body_lines(plan),
    }
}

/// Methods whose name is not a plain identifier are attached with a
/// string key so the generated module stays syntactically valid.
fn accessor_for(name: &str) -> String {
    if is_js_identifier(name) {
        format!("client.{name}")
    } else {
        format!("client[{}]", js_string(name))
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn js_string(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}

fn doc_lines(plan: &OperationPlan) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(summary) = &plan.summary {
        push_text(&mut lines, summary);
    }
    if let Some(description) = &plan.description {
        if !lines.is_empty() {
            lines.push("*".to_string());
        }
        push_text(&mut lines, description);
    }

    let mut tags = Vec::new();
    for parameter in plan
        .path_params
        .iter()
        .chain(&plan.query_params)
        .chain(&plan.header_params)
    {
        tags.push(param_line(parameter));
    }
    if let Some(body) = &plan.body {
        tags.extend(body_doc_lines(body));
    }

    if !tags.is_empty() {
        if !lines.is_empty() {
            lines.push("*".to_string());
        }
        lines.push("* @param {object} options".to_string());
        lines.append(&mut tags);
    } else if !lines.is_empty() {
        lines.push("*".to_string());
    }
    lines.push(format!(
        "* @returns {{Promise<{}>}}",
        descriptor_to_doc(&plan.success_type)
    ));
    lines
}

/// Free text becomes one comment line per source line; blank source
/// lines become bare separators.
fn push_text(lines: &mut Vec<String>, text: &str) {
    for line in text.lines() {
        if line.is_empty() {
            lines.push("*".to_string());
        } else {
            lines.push(format!("* {}", escape_jsdoc(line.to_string())));
        }
    }
}

fn param_line(parameter: &PlannedParameter) -> String {
    let doc_type = descriptor_to_doc(&parameter.param_type);
    let target = if parameter.required {
        format!("options.{}", parameter.ident)
    } else {
        format!("[options.{}]", parameter.ident)
    };
    match &parameter.description {
        Some(description) => format!(
            "* @param {{{doc_type}}} {target} - {}",
            escape_jsdoc(description.clone())
        ),
        None => format!("* @param {{{doc_type}}} {target}"),
    }
}

/// Object bodies get one line per field; anything else is documented as
/// a single `options.data` entry.
fn body_doc_lines(body: &PlannedBody) -> Vec<String> {
    let mut lines = Vec::new();
    match &body.body_type {
        TypeDescriptor::Object(fields) => {
            lines.push(format!(
                "* @param {{object}} {} - request body",
                body_target("options.data", body.required)
            ));
            for field in fields {
                let path = format!("options.data.{}", normalize(&field.name));
                lines.push(format!(
                    "* @param {{{}}} {}",
                    descriptor_to_doc(&field.field_type),
                    body_target(&path, body.required && field.required)
                ));
            }
        }
        other => {
            lines.push(format!(
                "* @param {{{}}} {} - request body",
                descriptor_to_doc(other),
                body_target("options.data", body.required)
            ));
        }
    }
    lines
}

fn body_target(path: &str, required: bool) -> String {
    if required {
        path.to_string()
    } else {
        format!("[{path}]")
    }
}

fn body_lines(plan: &OperationPlan) -> Vec<String> {
    let mut lines = Vec::new();

    let has_query = !plan.query_params.is_empty();
    if has_query {
        lines.push("const query = [];".to_string());
        for parameter in &plan.query_params {
            lines.push(format!("if (options.{} !== undefined) {{", parameter.ident));
            lines.push(format!(
                "  query.push(`{}=${{encodeURIComponent(options.{})}}`);",
                parameter.wire_name, parameter.ident
            ));
            lines.push("}".to_string());
        }
        lines.push("const search = query.length ? `?${query.join(\"&\")}` : \"\";".to_string());
    }

    let path = interpolate_path(&plan.path);
    if has_query {
        lines.push(format!("const url = `${{baseUrl}}{path}${{search}}`;"));
    } else {
        lines.push(format!("const url = `${{baseUrl}}{path}`;"));
    }

    let has_header = plan.body.is_some() || !plan.header_params.is_empty();
    if has_header {
        match &plan.body {
            Some(body) => {
                lines.push("const header = {".to_string());
                lines.push(format!(
                    "  \"Content-Type\": {},",
                    js_string(&body.content_type)
                ));
                lines.push("};".to_string());
            }
            None => lines.push("const header = {};".to_string()),
        }
        for parameter in &plan.header_params {
            lines.push(format!("if (options.{} !== undefined) {{", parameter.ident));
            lines.push(format!(
                "  header[{}] = options.{};",
                js_string(&parameter.wire_name),
                parameter.ident
            ));
            lines.push("}".to_string());
        }
    }

    lines.push("return request({".to_string());
    lines.push("  url,".to_string());
    lines.push(format!("  method: \"{}\",", plan.method.as_str()));
    if has_header {
        lines.push("  header,".to_string());
    }
    if plan.body.is_some() {
        lines.push("  data: options.data,".to_string());
    }
    lines.push("});".to_string());

    lines
}

/// Swap `{name}` placeholders for `${options.<ident>}` interpolations.
/// A brace that never closes is kept verbatim.
fn interpolate_path(path: &str) -> String {
    let mut interpolated = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        interpolated.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                interpolated.push_str("${options.");
                interpolated.push_str(&normalize(&after[..end]));
                interpolated.push('}');
                rest = &after[end + 1..];
            }
            None => {
                interpolated.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    interpolated.push_str(rest);
    interpolated
}

#[cfg(test)]
mod tests {
    use super::*;
    use ojc_core::parse::path::HttpMethod;

    fn list_plan() -> OperationPlan {
        OperationPlan {
            name: "getMomentList".to_string(),
            method: HttpMethod::Get,
            path: "/moment/list".to_string(),
            summary: Some("List recent moments.".to_string()),
            description: None,
            path_params: vec![],
            query_params: vec![PlannedParameter {
                wire_name: "limit".to_string(),
                ident: "limit".to_string(),
                param_type: TypeDescriptor::Number,
                required: false,
                description: None,
            }],
            header_params: vec![],
            body: None,
            success_type: TypeDescriptor::Unknown,
        }
    }

    #[test]
    fn test_accessor_for_identifiers_and_strings() {
        assert_eq!(accessor_for("getMomentList"), "client.getMomentList");
        assert_eq!(accessor_for("$batch"), "client.$batch");
        assert_eq!(accessor_for("weird name"), "client[\"weird name\"]");
        assert_eq!(accessor_for("2fast"), "client[\"2fast\"]");
        assert_eq!(accessor_for(""), "client[\"\"]");
    }

    #[test]
    fn test_interpolate_path() {
        assert_eq!(
            interpolate_path("/users/{id}/pets/{pet-id}"),
            "/users/${options.id}/pets/${options.petId}"
        );
        assert_eq!(interpolate_path("/plain"), "/plain");
        assert_eq!(interpolate_path("/broken/{oops"), "/broken/{oops");
    }

    #[test]
    fn test_doc_lines_layout() {
        assert_eq!(
            doc_lines(&list_plan()),
            [
                "* List recent moments.",
                "*",
                "* @param {object} options",
                "* @param {number} [options.limit]",
                "* @returns {Promise<unknown>}",
            ]
        );
    }

    #[test]
    fn test_multi_line_description_splits_into_lines() {
        let mut plan = list_plan();
        plan.description = Some("First line.\n\nSecond line.".to_string());
        let lines = doc_lines(&plan);
        assert_eq!(lines[0], "* List recent moments.");
        assert_eq!(lines[1], "*");
        assert_eq!(lines[2], "* First line.");
        assert_eq!(lines[3], "*");
        assert_eq!(lines[4], "* Second line.");
    }

    #[test]
    fn test_doc_lines_without_any_text_or_params() {
        let mut plan = list_plan();
        plan.summary = None;
        plan.query_params.clear();
        assert_eq!(doc_lines(&plan), ["* @returns {Promise<unknown>}"]);
    }

    #[test]
    fn test_body_lines_query_and_url() {
        assert_eq!(
            body_lines(&list_plan()),
            [
                "const query = [];",
                "if (options.limit !== undefined) {",
                "  query.push(`limit=${encodeURIComponent(options.limit)}`);",
                "}",
                "const search = query.length ? `?${query.join(\"&\")}` : \"\";",
                "const url = `${baseUrl}/moment/list${search}`;",
                "return request({",
                "  url,",
                "  method: \"GET\",",
                "});",
            ]
        );
    }

    #[test]
    fn test_body_lines_with_body_and_header() {
        let plan = OperationPlan {
            name: "createMoment".to_string(),
            method: HttpMethod::Post,
            path: "/moment".to_string(),
            summary: None,
            description: None,
            path_params: vec![],
            query_params: vec![],
            header_params: vec![PlannedParameter {
                wire_name: "X-Client-Version".to_string(),
                ident: "XClientVersion".to_string(),
                param_type: TypeDescriptor::String,
                required: false,
                description: None,
            }],
            body: Some(PlannedBody {
                content_type: "application/json".to_string(),
                body_type: TypeDescriptor::AnyObject,
                required: true,
            }),
            success_type: TypeDescriptor::Unknown,
        };
        assert_eq!(
            body_lines(&plan),
            [
                "const url = `${baseUrl}/moment`;",
                "const header = {",
                "  \"Content-Type\": \"application/json\",",
                "};",
                "if (options.XClientVersion !== undefined) {",
                "  header[\"X-Client-Version\"] = options.XClientVersion;",
                "}",
                "return request({",
                "  url,",
                "  method: \"POST\",",
                "  header,",
                "  data: options.data,",
                "});",
            ]
        );
    }
}
