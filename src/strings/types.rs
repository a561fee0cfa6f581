//! Wire types for the strings API
//!
//! Records, response envelopes, and the error payload returned by every
//! failing endpoint. All types serialize with snake_case field names.

use crate::analysis::StringProperties;
use crate::query::FilterSpec;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored string and its derived properties
///
/// Immutable once created: there is no update operation, only create and
/// delete. `id` always equals `properties.sha256_hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringRecord {
    /// Lowercase hex SHA-256 digest of `value`; the primary key
    pub id: String,
    /// The original string, exactly as submitted
    pub value: String,
    /// Properties computed at creation
    pub properties: StringProperties,
    /// Creation timestamp, ISO-8601
    pub created_at: DateTime<Utc>,
}

/// Response envelope for the filtered list endpoint
#[derive(Debug, Serialize)]
pub struct StringListResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: FilterSpec,
}

/// Response envelope for the natural-language filter endpoint
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// Echo of how a natural-language query was interpreted
///
/// Callers depend on inspecting which filters were inferred, so this is
/// part of the response contract rather than a debugging aid.
#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original_query: String,
    pub parsed_filters: FilterSpec,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetail,
}

/// API error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorDetail {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new("MISSING_FIELD", format!("Missing '{}' field", field))
    }

    pub fn invalid_type(field: &str) -> Self {
        Self::new("INVALID_TYPE", format!("Invalid data type for '{}'", field))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new("INVALID_PARAMETER", message)
    }

    pub fn missing_query() -> Self {
        Self::new("MISSING_QUERY", "Missing 'query' parameter")
    }

    pub fn unparseable_query(query: &str) -> Self {
        Self::new(
            "UNPARSEABLE_QUERY",
            format!("Could not interpret query: '{}'", query),
        )
    }

    pub fn code(&self) -> &str {
        &self.error.code
    }
}

/// Validate a create-request body and extract the string value
///
/// Runs before any hashing: the body must be an object carrying a `value`
/// key, and the value must be a JSON string.
pub fn parse_create_body(body: &serde_json::Value) -> Result<String, ApiError> {
    let value = body
        .get("value")
        .ok_or_else(|| ApiError::missing_field("value"))?;
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ApiError::invalid_type("value"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_record_serialization_shape() {
        let record = StringRecord {
            id: analyze("hi").sha256_hash.clone(),
            value: "hi".to_string(),
            properties: analyze("hi"),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["value"], "hi");
        assert_eq!(json["id"], json["properties"]["sha256_hash"]);
        assert_eq!(json["properties"]["length"], 2);
        assert_eq!(json["properties"]["word_count"], 1);
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn test_frequency_map_serializes_in_insertion_order() {
        let record = StringRecord {
            id: analyze("hello").sha256_hash.clone(),
            value: "hello".to_string(),
            properties: analyze("hello"),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let h = json.find("\"h\":1").unwrap();
        let e = json.find("\"e\":1").unwrap();
        let l = json.find("\"l\":2").unwrap();
        let o = json.find("\"o\":1").unwrap();
        assert!(h < e && e < l && l < o);
    }

    #[test]
    fn test_api_error_shape() {
        let err = ApiError::not_found("String not found");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"code\":\"NOT_FOUND\""));
        assert!(json.contains("\"message\":\"String not found\""));
    }

    #[test]
    fn test_parse_create_body_ok() {
        let body = serde_json::json!({"value": "hello"});
        assert_eq!(parse_create_body(&body).unwrap(), "hello");
    }

    #[test]
    fn test_parse_create_body_missing() {
        let body = serde_json::json!({});
        let err = parse_create_body(&body).unwrap_err();
        assert_eq!(err.code(), "MISSING_FIELD");
    }

    #[test]
    fn test_parse_create_body_wrong_type() {
        let body = serde_json::json!({"value": 12345});
        let err = parse_create_body(&body).unwrap_err();
        assert_eq!(err.code(), "INVALID_TYPE");
    }

    #[test]
    fn test_parse_create_body_null_is_wrong_type() {
        let body = serde_json::json!({"value": null});
        assert_eq!(parse_create_body(&body).unwrap_err().code(), "INVALID_TYPE");
    }

    #[test]
    fn test_list_response_shape() {
        let resp = StringListResponse {
            data: vec![],
            count: 0,
            filters_applied: FilterSpec {
                min_length: Some(5),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["count"], 0);
        assert_eq!(json["filters_applied"]["min_length"], 5);
        assert!(json["filters_applied"].get("max_length").is_none());
    }
}
