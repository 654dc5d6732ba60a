use ojc_core::error::ParseError;
use ojc_core::parse;
use ojc_core::parse::path::HttpMethod;

const MOMENTS: &str = include_str!("fixtures/moments.yaml");
const METHOD_ORDER: &str = include_str!("fixtures/method-order.yaml");

#[test]
fn test_metadata_and_servers() {
    let document = parse::from_yaml(MOMENTS).unwrap();
    assert_eq!(document.openapi, "3.0.0");
    assert_eq!(document.info.title, "Moments API");
    assert_eq!(document.info.version, "2.1.0");
    assert_eq!(document.servers.len(), 1);
    assert_eq!(document.servers[0].url, "https://api.moments.dev/v2");
}

#[test]
fn test_paths_keep_declaration_order() {
    let document = parse::from_yaml(MOMENTS).unwrap();
    let paths: Vec<&str> = document.paths.keys().map(String::as_str).collect();
    assert_eq!(paths, ["/moment/list", "/moment", "/moment/{momentId}"]);
}

#[test]
fn test_methods_keep_declaration_order() {
    let document = parse::from_yaml(METHOD_ORDER).unwrap();
    let item = &document.paths["/thing"];
    let methods: Vec<HttpMethod> = item.operations.iter().map(|(method, _)| *method).collect();
    assert_eq!(methods, [HttpMethod::Post, HttpMethod::Get, HttpMethod::Delete]);
}

#[test]
fn test_unknown_path_item_keys_are_skipped() {
    // trace is not a supported method and x-internal is an extension;
    // neither should show up or break the surrounding entries.
    let document = parse::from_yaml(METHOD_ORDER).unwrap();
    let item = &document.paths["/thing"];
    assert_eq!(item.operations.len(), 3);
    assert_eq!(item.summary.as_deref(), Some("Thing routes."));
}

#[test]
fn test_path_item_parameters_are_separate_from_operations() {
    let document = parse::from_yaml(MOMENTS).unwrap();
    let item = &document.paths["/moment/{momentId}"];
    assert_eq!(item.parameters.len(), 1);
    assert_eq!(item.operations.len(), 1);
}

#[test]
fn test_rejects_non_3_0_documents() {
    let yaml = r#"
openapi: "3.1.0"
info:
  title: Nope
  version: "1.0"
paths: {}
"#;
    match parse::from_yaml(yaml) {
        Err(ParseError::UnsupportedVersion(version)) => assert_eq!(version, "3.1.0"),
        other => panic!("expected a version error, got {other:?}"),
    }
}

#[test]
fn test_accepts_any_3_0_patch_release() {
    let yaml = r#"
openapi: 3.0.4
info:
  title: Patched
  version: "1.0"
paths: {}
"#;
    assert!(parse::from_yaml(yaml).is_ok());
}

#[test]
fn test_parses_json_documents() {
    let json = r#"{"openapi": "3.0.3", "info": {"title": "J", "version": "1"}, "paths": {}}"#;
    let document = parse::from_json(json).unwrap();
    assert_eq!(document.openapi, "3.0.3");
    assert!(document.paths.is_empty());
}
