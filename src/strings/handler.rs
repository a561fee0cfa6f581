//! HTTP handlers for the strings API
//!
//! Provides 5 REST endpoints:
//! - POST   /strings                              — analyze and store a string
//! - GET    /strings                              — list with structured filters
//! - GET    /strings/filter-by-natural-language   — list via interpreted query
//! - GET    /strings/:value                       — retrieve by exact value
//! - DELETE /strings/:value                       — delete by exact value
//!
//! The filter-by-natural-language path is static, so it takes priority over
//! the `:value` capture.

use crate::query::{interpret, FilterSpec};
use crate::strings::store::StringStore;
use crate::strings::types::{
    parse_create_body, ApiError, InterpretedQuery, NaturalLanguageResponse, StringListResponse,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Shared state for string handlers
#[derive(Clone)]
pub struct StringsState {
    pub store: Arc<StringStore>,
}

/// Create the strings router with all REST endpoints
pub fn strings_router(state: StringsState) -> Router {
    Router::new()
        .route("/strings", post(create_string))
        .route("/strings", get(list_strings))
        .route(
            "/strings/filter-by-natural-language",
            get(filter_by_natural_language),
        )
        .route("/strings/:value", get(get_string))
        .route("/strings/:value", delete(delete_string))
        .with_state(state)
}

// =============================================================================
// Query parameter types
// =============================================================================

/// Raw list filters as they arrive on the wire
///
/// Kept as strings so numeric validation failures surface as structured
/// 400 responses instead of extractor rejections.
#[derive(Debug, Deserialize)]
struct ListStringsQuery {
    is_palindrome: Option<String>,
    min_length: Option<String>,
    max_length: Option<String>,
    word_count: Option<String>,
    contains_character: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NaturalLanguageQuery {
    query: Option<String>,
}

impl ListStringsQuery {
    /// Validate the raw parameters into a typed filter set
    fn parse(self) -> Result<FilterSpec, ApiError> {
        Ok(FilterSpec {
            // The literal "true" selects palindromes; any other value
            // selects non-palindromes
            is_palindrome: self.is_palindrome.map(|raw| raw == "true"),
            min_length: parse_numeric("min_length", self.min_length)?,
            max_length: parse_numeric("max_length", self.max_length)?,
            word_count: parse_numeric("word_count", self.word_count)?,
            contains_character: self
                .contains_character
                .map(|raw| parse_single_char("contains_character", &raw))
                .transpose()?,
        })
    }
}

fn parse_numeric(name: &str, raw: Option<String>) -> Result<Option<usize>, ApiError> {
    raw.map(|raw| {
        raw.parse().map_err(|_| {
            ApiError::invalid_parameter(format!("Invalid value for '{}': expected an integer", name))
        })
    })
    .transpose()
}

fn parse_single_char(name: &str, raw: &str) -> Result<char, ApiError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ApiError::invalid_parameter(format!(
            "Invalid value for '{}': expected a single character",
            name
        ))),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /strings
async fn create_string(
    State(state): State<StringsState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let value = match parse_create_body(&body) {
        Ok(value) => value,
        Err(err) => {
            let status = match err.code() {
                "INVALID_TYPE" => StatusCode::UNPROCESSABLE_ENTITY,
                _ => StatusCode::BAD_REQUEST,
            };
            return (status, Json(err)).into_response();
        }
    };

    match state.store.create(value).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => (StatusCode::CONFLICT, Json(err)).into_response(),
    }
}

/// GET /strings/:value
async fn get_string(State(state): State<StringsState>, Path(value): Path<String>) -> Response {
    match state.store.get_by_value(&value).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => (StatusCode::NOT_FOUND, Json(err)).into_response(),
    }
}

/// GET /strings
async fn list_strings(
    State(state): State<StringsState>,
    Query(query): Query<ListStringsQuery>,
) -> Response {
    let filters = match query.parse() {
        Ok(filters) => filters,
        Err(err) => return (StatusCode::BAD_REQUEST, Json(err)).into_response(),
    };

    let records = state.store.list_all().await;
    let data = filters.apply(&records);

    (
        StatusCode::OK,
        Json(StringListResponse {
            count: data.len(),
            data,
            filters_applied: filters,
        }),
    )
        .into_response()
}

/// GET /strings/filter-by-natural-language
async fn filter_by_natural_language(
    State(state): State<StringsState>,
    Query(query): Query<NaturalLanguageQuery>,
) -> Response {
    let phrase = match query.query {
        Some(phrase) if !phrase.is_empty() => phrase,
        _ => {
            return (StatusCode::BAD_REQUEST, Json(ApiError::missing_query())).into_response();
        }
    };

    // An uninterpretable query is an error, never "all records"
    let filters = match interpret(&phrase) {
        Ok(filters) => filters,
        Err(err) => return (StatusCode::BAD_REQUEST, Json(err)).into_response(),
    };

    let records = state.store.list_all().await;
    let data = filters.apply(&records);

    (
        StatusCode::OK,
        Json(NaturalLanguageResponse {
            count: data.len(),
            data,
            interpreted_query: InterpretedQuery {
                original_query: phrase,
                parsed_filters: filters,
            },
        }),
    )
        .into_response()
}

/// DELETE /strings/:value
async fn delete_string(State(state): State<StringsState>, Path(value): Path<String>) -> Response {
    match state.store.delete_by_value(&value).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => (StatusCode::NOT_FOUND, Json(err)).into_response(),
    }
}
