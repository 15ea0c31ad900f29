use oas_gatekeeper::*;
use serde_json::json;

/// Operation with one required header, one optional query parameter, one
/// required path parameter, and 200/default responses. This mirrors the
/// shape of a typical `GET /items/{id}` contract entry.
#[allow(dead_code)]
pub fn create_item_operation() -> OperationSpec {
    let mut operation = OperationSpec::new().with_operation_id("getItem");

    operation.add_parameter(ParameterSpec::new("X-Api-Key", "header").required());
    operation.add_parameter(
        ParameterSpec::new("limit", "query")
            .with_description("Page size")
            .with_schema(json!({"type": "integer", "minimum": 1, "maximum": 100})),
    );
    operation.add_parameter(
        ParameterSpec::new("id", "path")
            .required()
            .with_schema(json!({"type": "string", "minLength": 1})),
    );

    let mut ok = ResponseSpec::new("the item");
    ok.add_content(
        "application/json",
        MediaTypeSpec::with_schema(json!({
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": {"type": "string"},
                "name": {"type": "string"}
            }
        })),
    );
    operation.add_response("200", ok);

    let mut fallback = ResponseSpec::new("any error");
    fallback.add_content(
        "application/json",
        MediaTypeSpec::with_schema(json!({
            "type": "object",
            "required": ["message"],
            "properties": {"message": {"type": "string"}}
        })),
    );
    operation.add_response("default", fallback);

    operation
}

/// Operation that declares a required JSON request body and a cookie
/// parameter, the shape of a typical `POST /items` contract entry.
#[allow(dead_code)]
pub fn create_create_item_operation() -> OperationSpec {
    let mut operation = OperationSpec::new().with_operation_id("createItem");

    operation.add_parameter(ParameterSpec::new("session", "cookie").required());

    let mut body = RequestBodySpec::new().required();
    body.add_content(
        "application/json",
        MediaTypeSpec::with_schema(json!({
            "type": "object",
            "required": ["name"],
            "properties": {
                "name": {"type": "string", "minLength": 1},
                "tags": {"type": "array", "items": {"type": "string"}}
            }
        })),
    );
    operation = operation.with_request_body(body);

    operation.add_response("201", ResponseSpec::new("created"));

    operation
}

/// A well-formed request for [`create_item_operation`].
#[allow(dead_code)]
pub fn create_valid_item_request() -> RequestMeta {
    RequestMeta::new()
        .with_header("x-api-key", json!("secret"))
        .with_query("limit", json!(10))
        .with_path("id", json!("widget-7"))
}
