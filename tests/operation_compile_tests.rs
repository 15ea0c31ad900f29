/*!
 * Operation Compilation Tests
 * Covers parameter classification, validator construction, and
 * compile-time failure modes.
 */

use oas_gatekeeper::*;
use serde_json::json;
mod test_utils;
use test_utils::*;

#[test]
fn test_compile_classifies_every_parameter() {
    let mut operation = create_item_operation();
    operation.add_parameter(ParameterSpec::new("session", "cookie"));
    operation.add_parameter(ParameterSpec::new("version", "path").required());

    let compiled = CompiledOperation::new(&operation).unwrap();

    assert_eq!(compiled.path_parameter_count(), 2);
    assert_eq!(compiled.cookie_parameter_count(), 1);
    assert!(compiled.path_parameter("id").is_some());
    assert!(compiled.path_parameter("version").is_some());
    assert!(compiled.cookie_parameter("session").is_some());
}

#[test]
fn test_unrecognized_location_is_a_compile_failure() {
    let mut operation = create_item_operation();
    operation.add_parameter(ParameterSpec::new("payload", "formData"));

    let err = CompiledOperation::new(&operation).unwrap_err();
    match err {
        ContractError::UnsupportedParameterLocation { name, location } => {
            assert_eq!(name, "payload");
            assert_eq!(location, "formData");
        }
        other => panic!("expected UnsupportedParameterLocation, got: {other}"),
    }
}

#[test]
fn test_location_tags_are_case_sensitive() {
    let mut operation = OperationSpec::new();
    operation.add_parameter(ParameterSpec::new("id", "Path"));
    operation.add_response("200", ResponseSpec::new("ok"));

    assert!(matches!(
        CompiledOperation::new(&operation).unwrap_err(),
        ContractError::UnsupportedParameterLocation { .. }
    ));
}

#[test]
fn test_body_validator_only_built_when_declared() {
    let without = CompiledOperation::new(&create_item_operation()).unwrap();
    assert!(!without.has_body_validator());

    let with = CompiledOperation::new(&create_create_item_operation()).unwrap();
    assert!(with.has_body_validator());
}

#[test]
fn test_every_declared_response_gets_a_validator() {
    let compiled = CompiledOperation::new(&create_item_operation()).unwrap();

    assert!(compiled.declares_response(&ResponseKey::Status("200".to_string())));
    assert!(compiled.declares_response(&ResponseKey::Default));
    assert!(!compiled.declares_response(&ResponseKey::Status("404".to_string())));
}

#[test]
fn test_uncompilable_parameter_schema_fails_compilation() {
    let mut operation = OperationSpec::new();
    operation.add_parameter(
        ParameterSpec::new("limit", "query").with_schema(json!({"type": 42})),
    );
    operation.add_response("200", ResponseSpec::new("ok"));

    let err = CompiledOperation::new(&operation).unwrap_err();
    match err {
        ContractError::SchemaCompile { context, .. } => {
            assert!(context.contains("limit"));
        }
        other => panic!("expected SchemaCompile, got: {other}"),
    }
}

#[test]
fn test_compiled_operation_is_shareable_across_threads() {
    let compiled =
        std::sync::Arc::new(CompiledOperation::new(&create_item_operation()).unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let compiled = std::sync::Arc::clone(&compiled);
            std::thread::spawn(move || {
                for _ in 0..50 {
                    compiled.validate_request(&create_valid_item_request()).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
