//! Operation enumeration over a loaded OpenAPI document
//!
//! Walks `paths` in document order, then the method entries of each path item,
//! then the parameters of each operation. Only the minimal subset needed for
//! test generation is read: `operationId`, `parameters` (with local `$ref`
//! resolution) and the presence of `requestBody`.

use std::collections::HashMap;

use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::{debug, warn};

use crate::core::utils::rust_identifier;
use crate::generation::{
    GenerationError, HttpMethod, Operation, Parameter, SpecDocument, infer_type,
};

/// Parameter as declared, before type inference
struct DeclaredParameter<'a> {
    name: &'a str,
    location: Option<&'a str>,
    schema: Option<&'a JsonValue>,
}

impl DeclaredParameter<'_> {
    fn same_slot(&self, other: &DeclaredParameter<'_>) -> bool {
        self.name == other.name && self.location == other.location
    }
}

/// Extracts [`Operation`] records from a [`SpecDocument`]
pub struct OpenApiParser<'a> {
    doc: &'a SpecDocument,
}

impl<'a> OpenApiParser<'a> {
    pub fn new(doc: &'a SpecDocument) -> Self {
        Self { doc }
    }

    /// Every operation carrying a non-empty `operationId`, in document order.
    ///
    /// A document without a `paths` object has no operations.
    pub fn parse_operations(&self) -> Vec<Operation> {
        let root: &'a JsonValue = &self.doc.root;
        let Some(paths) = root.get("paths").and_then(JsonValue::as_object) else {
            debug!(source = %self.doc.source.display(), "Document has no 'paths' object");
            return Vec::new();
        };

        let operations: Vec<Operation> = paths
            .iter()
            .filter_map(|(path, path_item)| {
                path_item
                    .as_object()
                    .map(|path_item| (path.as_str(), path_item))
            })
            .flat_map(|(path, path_item)| {
                path_item.iter().filter_map(move |(key, value)| {
                    let method = key.parse::<HttpMethod>().ok()?;
                    let method_item = value.as_object()?;
                    Some((path, method, path_item, method_item))
                })
            })
            .filter_map(|(path, method, path_item, method_item)| {
                self.build_operation(path, method, path_item, method_item)
            })
            .collect();

        debug!("OpenAPI parser found {} operations", operations.len());
        operations
    }

    fn build_operation(
        &self,
        path: &str,
        method: HttpMethod,
        path_item: &'a JsonMap<String, JsonValue>,
        method_item: &'a JsonMap<String, JsonValue>,
    ) -> Option<Operation> {
        let Some(id) = method_item
            .get("operationId")
            .and_then(JsonValue::as_str)
            .filter(|id| !id.is_empty())
        else {
            debug!("Skipping {} {}: no operationId", method.as_str().to_uppercase(), path);
            return None;
        };

        // Operation-level parameters override path-level ones in place
        let mut declared = self.extract_parameters(path_item);
        for param in self.extract_parameters(method_item) {
            match declared.iter().position(|existing| existing.same_slot(&param)) {
                Some(index) => declared[index] = param,
                None => declared.push(param),
            }
        }

        let parameters = declared
            .into_iter()
            .map(|param| Parameter {
                name: param.name.to_string(),
                inferred_type: match param.schema {
                    Some(schema) => infer_type(self.resolve(schema).unwrap_or(schema)),
                    None => infer_type(&JsonValue::Null),
                },
            })
            .collect();

        let has_request_body = method_item.contains_key("requestBody");
        if has_request_body {
            debug!(
                operation_id = id,
                "Request body fields are not generated as parameters"
            );
        }

        Some(Operation {
            id: id.to_string(),
            path: path.to_string(),
            method,
            parameters,
            has_request_body,
        })
    }

    /// Parameters declared directly on a path item or operation object
    fn extract_parameters(
        &self,
        container: &'a JsonMap<String, JsonValue>,
    ) -> Vec<DeclaredParameter<'a>> {
        let Some(entries) = container.get("parameters").and_then(JsonValue::as_array) else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(|entry| {
                let Some(param) = self.resolve(entry) else {
                    warn!(entry = %entry, "Skipping parameter with unresolvable $ref");
                    return None;
                };
                let Some(name) = param.get("name").and_then(JsonValue::as_str) else {
                    warn!(entry = %entry, "Skipping parameter without a name");
                    return None;
                };
                Some(DeclaredParameter {
                    name,
                    location: param.get("in").and_then(JsonValue::as_str),
                    schema: param.get("schema"),
                })
            })
            .collect()
    }

    /// Follow a local `$ref` one hop; values without `$ref` resolve to themselves
    fn resolve(&self, value: &'a JsonValue) -> Option<&'a JsonValue> {
        match value.get("$ref").and_then(JsonValue::as_str) {
            Some(reference) => reference
                .strip_prefix('#')
                .and_then(|pointer| self.doc.root.pointer(pointer)),
            None => Some(value),
        }
    }
}

/// Check operations for colliding test names.
///
/// Names are compared after snake_case normalization, so `createChat` and
/// `create_chat` collide. Collisions are logged and passed through unless
/// `strict` is set, in which case the first one is returned as an error.
pub fn ensure_unique_ids(operations: &[Operation], strict: bool) -> Result<(), GenerationError> {
    let mut seen: HashMap<String, &Operation> = HashMap::new();

    for op in operations {
        let fn_name = rust_identifier(&op.id);
        if let Some(first) = seen.get(&fn_name) {
            if strict {
                return Err(GenerationError::DuplicateOperationId {
                    test_name: format!("test_{fn_name}"),
                    first_id: first.id.clone(),
                    second_id: op.id.clone(),
                    first: first.location(),
                    second: op.location(),
                });
            }
            warn!(
                test_name = %format!("test_{fn_name}"),
                first_id = %first.id,
                second_id = %op.id,
                first = %first.location(),
                second = %op.location(),
                "Duplicate test name; both operations render the same function"
            );
        } else {
            seen.insert(fn_name, op);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::InferredType;
    use serde_json::json;
    use std::path::PathBuf;
    use tracing_test::traced_test;

    fn doc(root: JsonValue) -> SpecDocument {
        SpecDocument {
            source: PathBuf::from("openapi.json"),
            root,
        }
    }

    #[test]
    fn test_single_operation() {
        let spec = doc(json!({
            "paths": {
                "/chat": {
                    "post": {
                        "operationId": "createChat",
                        "parameters": [{"name": "model", "in": "query", "schema": {"type": "string"}}]
                    }
                }
            }
        }));

        let ops = OpenApiParser::new(&spec).parse_operations();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].id, "createChat");
        assert_eq!(ops[0].method, HttpMethod::Post);
        assert_eq!(ops[0].path, "/chat");
        assert_eq!(
            ops[0].parameters,
            vec![Parameter {
                name: "model".to_string(),
                inferred_type: InferredType::StringFallback,
            }]
        );
    }

    #[test]
    fn test_document_order_is_preserved() {
        let spec = doc(json!({
            "paths": {
                "/z": {"put": {"operationId": "zPut"}, "get": {"operationId": "zGet"}},
                "/a": {
                    "post": {
                        "operationId": "aPost",
                        "parameters": [
                            {"name": "zeta", "in": "query", "schema": {"type": "integer"}},
                            {"name": "alpha", "in": "query", "schema": {"type": "boolean"}}
                        ]
                    }
                }
            }
        }));

        let ops = OpenApiParser::new(&spec).parse_operations();
        let ids: Vec<_> = ops.iter().map(|op| op.id.as_str()).collect();
        assert_eq!(ids, vec!["zPut", "zGet", "aPost"]);

        let names: Vec<_> = ops[2].parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_operations_without_id_are_skipped() {
        let spec = doc(json!({
            "paths": {
                "/models": {
                    "get": {"operationId": "listModels"},
                    "post": {"summary": "no id"},
                    "delete": {"operationId": ""},
                    "patch": {"operationId": 42}
                }
            }
        }));

        let ops = OpenApiParser::new(&spec).parse_operations();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].id, "listModels");
    }

    #[test]
    fn test_non_method_keys_are_ignored() {
        let spec = doc(json!({
            "paths": {
                "/models/{id}": {
                    "summary": "Model",
                    "x-internal": {"operationId": "hidden"},
                    "parameters": [{"name": "id", "in": "path", "schema": {"type": "integer"}}],
                    "get": {"operationId": "getModel"}
                }
            }
        }));

        let ops = OpenApiParser::new(&spec).parse_operations();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].parameters[0].inferred_type, InferredType::Integer);
    }

    #[test]
    fn test_missing_paths_yields_nothing() {
        let spec = doc(json!({"openapi": "3.0.0", "info": {"title": "t", "version": "1"}}));
        assert!(OpenApiParser::new(&spec).parse_operations().is_empty());
    }

    #[test]
    fn test_missing_parameters_yields_empty_list() {
        let spec = doc(json!({"paths": {"/models": {"get": {"operationId": "listModels"}}}}));
        let ops = OpenApiParser::new(&spec).parse_operations();
        assert!(ops[0].parameters.is_empty());
    }

    #[test]
    fn test_parameter_without_schema_falls_back_to_string() {
        let spec = doc(json!({
            "paths": {"/x": {"get": {"operationId": "x", "parameters": [{"name": "q", "in": "query"}]}}}
        }));
        let ops = OpenApiParser::new(&spec).parse_operations();
        assert_eq!(ops[0].parameters[0].inferred_type, InferredType::StringFallback);
    }

    #[test]
    fn test_path_level_parameters_merge() {
        let spec = doc(json!({
            "paths": {
                "/models/{id}": {
                    "parameters": [
                        {"name": "id", "in": "path", "schema": {"type": "string"}},
                        {"name": "verbose", "in": "query", "schema": {"type": "boolean"}}
                    ],
                    "get": {
                        "operationId": "getModel",
                        "parameters": [
                            {"name": "limit", "in": "query", "schema": {"type": "integer"}},
                            {"name": "id", "in": "path", "schema": {"type": "integer"}}
                        ]
                    }
                }
            }
        }));

        let ops = OpenApiParser::new(&spec).parse_operations();
        let params: Vec<_> = ops[0]
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.inferred_type.rust_type()))
            .collect();
        assert_eq!(
            params,
            vec![
                ("id", "i64".to_string()),
                ("verbose", "bool".to_string()),
                ("limit", "i64".to_string()),
            ]
        );
    }

    #[test]
    fn test_parameter_and_schema_refs_are_resolved() {
        let spec = doc(json!({
            "paths": {
                "/models": {
                    "get": {
                        "operationId": "listModels",
                        "parameters": [
                            {"$ref": "#/components/parameters/Limit"},
                            {"name": "ids", "in": "query", "schema": {"$ref": "#/components/schemas/Ids"}}
                        ]
                    }
                }
            },
            "components": {
                "parameters": {
                    "Limit": {"name": "limit", "in": "query", "schema": {"type": "integer"}}
                },
                "schemas": {
                    "Ids": {"type": "array", "items": {"type": "integer"}}
                }
            }
        }));

        let ops = OpenApiParser::new(&spec).parse_operations();
        assert_eq!(ops[0].parameters[0].name, "limit");
        assert_eq!(ops[0].parameters[0].inferred_type, InferredType::Integer);
        assert_eq!(ops[0].parameters[1].inferred_type.rust_type(), "Vec<i64>");
    }

    #[test]
    #[traced_test]
    fn test_unresolvable_parameter_is_skipped() {
        let spec = doc(json!({
            "paths": {
                "/models": {
                    "get": {
                        "operationId": "listModels",
                        "parameters": [
                            {"$ref": "#/components/parameters/Missing"},
                            {"in": "query"},
                            {"name": "limit", "in": "query"}
                        ]
                    }
                }
            }
        }));

        let ops = OpenApiParser::new(&spec).parse_operations();
        assert_eq!(ops[0].parameters.len(), 1);
        assert!(logs_contain("unresolvable $ref"));
        assert!(logs_contain("without a name"));
    }

    #[test]
    fn test_request_body_is_flagged_not_expanded() {
        let spec = doc(json!({
            "paths": {
                "/chat": {
                    "post": {
                        "operationId": "createChat",
                        "requestBody": {
                            "content": {"application/json": {"schema": {"type": "object"}}}
                        }
                    }
                }
            }
        }));

        let ops = OpenApiParser::new(&spec).parse_operations();
        assert!(ops[0].has_request_body);
        assert!(ops[0].parameters.is_empty());
    }

    fn ops_with_ids(first: &str, second: &str) -> Vec<Operation> {
        let spec = doc(json!({
            "paths": {
                "/models": {"get": {"operationId": first}},
                "/v2/models": {"get": {"operationId": second}}
            }
        }));
        OpenApiParser::new(&spec).parse_operations()
    }

    #[test]
    #[traced_test]
    fn test_duplicate_ids_pass_through_by_default() {
        let ops = ops_with_ids("listModels", "listModels");
        assert_eq!(ops.len(), 2);
        assert!(ensure_unique_ids(&ops, false).is_ok());
        assert!(logs_contain("Duplicate test name"));
    }

    #[test]
    fn test_duplicate_ids_fail_in_strict_mode() {
        let ops = ops_with_ids("listModels", "listModels");
        match ensure_unique_ids(&ops, true) {
            Err(GenerationError::DuplicateOperationId {
                test_name,
                first_id,
                second_id,
                first,
                second,
            }) => {
                assert_eq!(test_name, "test_list_models");
                assert_eq!(first_id, "listModels");
                assert_eq!(second_id, "listModels");
                assert_eq!(first, "GET /models");
                assert_eq!(second, "GET /v2/models");
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_ids_colliding_after_snake_case_fail_in_strict_mode() {
        let ops = ops_with_ids("createChat", "create_chat");
        match ensure_unique_ids(&ops, true) {
            Err(GenerationError::DuplicateOperationId {
                test_name,
                first_id,
                second_id,
                ..
            }) => {
                assert_eq!(test_name, "test_create_chat");
                assert_eq!(first_id, "createChat");
                assert_eq!(second_id, "create_chat");
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    #[traced_test]
    fn test_ids_colliding_after_snake_case_warn_by_default() {
        let ops = ops_with_ids("createChat", "create_chat");
        assert!(ensure_unique_ids(&ops, false).is_ok());
        assert!(logs_contain("Duplicate test name"));
        assert!(logs_contain("create_chat"));
    }

    #[test]
    fn test_distinct_names_pass_strict_mode() {
        let ops = ops_with_ids("listModels", "listModelsV2");
        assert!(ensure_unique_ids(&ops, true).is_ok());
    }
}
