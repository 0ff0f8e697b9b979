//! Core types for the generation domain

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value as JsonValue;

/// A loaded OpenAPI document.
///
/// Object keys keep their document order, which fixes the order of the
/// generated tests.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    pub source: PathBuf,
    pub root: JsonValue,
}

/// HTTP methods that may appear as operation keys on an OpenAPI path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ();

    /// Path item keys are case-sensitive in OpenAPI, so only lowercase matches
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(HttpMethod::Get),
            "put" => Ok(HttpMethod::Put),
            "post" => Ok(HttpMethod::Post),
            "delete" => Ok(HttpMethod::Delete),
            "options" => Ok(HttpMethod::Options),
            "head" => Ok(HttpMethod::Head),
            "patch" => Ok(HttpMethod::Patch),
            "trace" => Ok(HttpMethod::Trace),
            _ => Err(()),
        }
    }
}

/// Rust type inferred from a parameter schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferredType {
    Integer,
    Float,
    Boolean,
    ListOf(Box<InferredType>),
    StringFallback,
}

impl InferredType {
    /// Rust spelling of this type, e.g. `Vec<i64>`
    pub fn rust_type(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferredType::Integer => f.write_str("i64"),
            InferredType::Float => f.write_str("f64"),
            InferredType::Boolean => f.write_str("bool"),
            InferredType::ListOf(item) => write!(f, "Vec<{item}>"),
            InferredType::StringFallback => f.write_str("String"),
        }
    }
}

/// Operation parameter with its inferred type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Name as declared in the document
    pub name: String,
    pub inferred_type: InferredType,
}

/// One API operation that will receive a generated test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// The `operationId`, never empty
    pub id: String,
    pub path: String,
    pub method: HttpMethod,
    /// Path-level and operation-level parameters in declaration order
    pub parameters: Vec<Parameter>,
    /// Body fields are not turned into parameters
    pub has_request_body: bool,
}

impl Operation {
    /// Human-readable location such as `POST /chat`
    pub fn location(&self) -> String {
        format!("{} {}", self.method.as_str().to_uppercase(), self.path)
    }
}

/// Outcome of a successful generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub test_count: usize,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated {} with {} test(s).",
            self.output_path.display(),
            self.test_count
        )
    }
}
