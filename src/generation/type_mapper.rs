//! Schema to Rust type inference

use serde_json::Value as JsonValue;

use crate::generation::InferredType;

/// Infer the Rust type for a parameter schema.
///
/// Only `type` (and `items` for arrays) is consulted. Anything unrecognised,
/// including a missing or non-string `type` and non-object schemas, falls back
/// to `String`.
pub fn infer_type(schema: &JsonValue) -> InferredType {
    match schema.get("type").and_then(JsonValue::as_str) {
        Some("integer") => InferredType::Integer,
        Some("number") => InferredType::Float,
        Some("boolean") => InferredType::Boolean,
        Some("array") => {
            let item = schema
                .get("items")
                .map(infer_type)
                .unwrap_or(InferredType::StringFallback);
            InferredType::ListOf(Box::new(item))
        }
        _ => InferredType::StringFallback,
    }
}
