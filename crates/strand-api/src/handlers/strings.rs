//! String record handlers.
//!
//! Path lookups hash the trimmed path value, so `GET /strings/%20abc` finds
//! the record created from `"abc"`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use strand_core::{
    apply, content_hash, CreateStringRequest, Error, FilterSet, StringRecord,
};
use strand_query::{interpret, InterpretedQuery};

use crate::query_types::{ListStringsQuery, NaturalLanguageQuery};
use crate::{ApiError, AppState};

/// Response from `GET /strings`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListStringsResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    /// The filters that were applied; empty when the store is empty.
    pub filters_applied: FilterSet,
}

/// Response from `GET /strings/filter-by-natural-language`.
#[derive(Debug, Serialize, ToSchema)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// Analyze and store a string.
#[utoipa::path(
    post,
    path = "/strings",
    tag = "Strings",
    request_body = CreateStringRequest,
    responses(
        (status = 201, description = "String analyzed and stored", body = StringRecord),
        (status = 409, description = "String already exists"),
        (status = 422, description = "Missing or non-string value")
    )
)]
#[instrument(skip_all, fields(subsystem = "api", component = "strings", op = "create"))]
pub async fn create_string(
    State(state): State<AppState>,
    payload: Result<Json<CreateStringRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StringRecord>), ApiError> {
    let Json(req) =
        payload.map_err(|rejection| ApiError::Rejected(rejection.status(), rejection.body_text()))?;

    let record = state.store.put(StringRecord::new(req.value)).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// List stored strings, optionally filtered.
#[utoipa::path(
    get,
    path = "/strings",
    tag = "Strings",
    params(
        ("is_palindrome" = Option<bool>, Query, description = "Require palindrome status"),
        ("min_length" = Option<i64>, Query, description = "Inclusive minimum length"),
        ("max_length" = Option<i64>, Query, description = "Inclusive maximum length"),
        ("word_count" = Option<i64>, Query, description = "Exact word count"),
        ("contains_character" = Option<String>, Query, description = "Single character that must occur")
    ),
    responses(
        (status = 200, description = "Matching strings", body = ListStringsResponse),
        (status = 400, description = "Malformed filter parameter")
    )
)]
#[instrument(skip_all, fields(subsystem = "api", component = "strings", op = "list"))]
pub async fn list_strings(
    State(state): State<AppState>,
    query: Result<Query<ListStringsQuery>, QueryRejection>,
) -> Result<Json<ListStringsResponse>, ApiError> {
    let Query(params) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let filters = params.into_filters();

    let records = state.store.list().await?;
    if records.is_empty() {
        return Ok(Json(ListStringsResponse {
            data: Vec::new(),
            count: 0,
            filters_applied: FilterSet::new(),
        }));
    }

    let data = apply(records, &filters);
    debug!(
        constraint_count = filters.active_constraint_count(),
        result_count = data.len(),
        "Applied structured filters"
    );

    Ok(Json(ListStringsResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}

/// Filter stored strings with a natural-language query.
#[utoipa::path(
    get,
    path = "/strings/filter-by-natural-language",
    tag = "Strings",
    params(
        ("query" = String, Query, description = "Free-text query, e.g. 'single word palindromes'")
    ),
    responses(
        (status = 200, description = "Matching strings and the interpreted filters", body = NaturalLanguageResponse),
        (status = 400, description = "Query missing or not understood"),
        (status = 404, description = "Query understood but nothing matched")
    )
)]
#[instrument(skip_all, fields(subsystem = "api", component = "strings", op = "filter_nl"))]
pub async fn filter_by_natural_language(
    State(state): State<AppState>,
    query: Result<Query<NaturalLanguageQuery>, QueryRejection>,
) -> Result<Json<NaturalLanguageResponse>, ApiError> {
    let Query(params) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let text = params
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| Error::InvalidInput("Query is required".to_string()))?;

    let interpreted = interpret(&text)?;
    let data = apply(state.store.list().await?, &interpreted.parsed_filters);
    debug!(
        query = %text,
        rules = ?interpreted.matched_rules,
        result_count = data.len(),
        "Applied interpreted filters"
    );

    if data.is_empty() {
        return Err(Error::NoMatch("No strings matched your query".to_string()).into());
    }

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: interpreted,
    }))
}

/// Fetch a stored string by its value.
#[utoipa::path(
    get,
    path = "/strings/{value}",
    tag = "Strings",
    params(("value" = String, Path, description = "String value; surrounding whitespace is ignored")),
    responses(
        (status = 200, description = "Stored string", body = StringRecord),
        (status = 404, description = "String not found")
    )
)]
#[instrument(skip_all, fields(subsystem = "api", component = "strings", op = "get"))]
pub async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<Json<StringRecord>, ApiError> {
    state
        .store
        .get(&content_hash(&value))
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("string not found".to_string()))
}

/// Delete a stored string by its value.
#[utoipa::path(
    delete,
    path = "/strings/{value}",
    tag = "Strings",
    params(("value" = String, Path, description = "String value; surrounding whitespace is ignored")),
    responses(
        (status = 204, description = "String deleted"),
        (status = 404, description = "String not found")
    )
)]
#[instrument(skip_all, fields(subsystem = "api", component = "strings", op = "delete"))]
pub async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&content_hash(&value)).await?;
    Ok(StatusCode::NO_CONTENT)
}
