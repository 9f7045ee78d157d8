//! Data Routes
//!
//! Synthetic dataset generation and filtering of caller-supplied records.
//!
//! - GET /api/v1/data - Generate a dataset
//! - POST /api/v1/data - Filter uploaded records
//! - GET /api/v1/employees/summary - Headline metrics of the employee table

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::{DataQuery, DataResponse, ProcessRequest, ProcessResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::config::GeneratorConfig;
use crate::data::{
    employees, parse_count, summarize, DataError, DataGenerator, DataResult, Dataset, DatasetKind,
    EmployeeSummary, Filters, JsonRecord,
};

/// GET /api/v1/data
///
/// Generate a dataset, optionally filtered by threshold and category.
/// Unknown dataset types produce an empty list.
pub async fn get_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DataQuery>,
) -> ApiResult<Json<DataResponse>> {
    let data = generate(state.generator(), &params).map_err(ApiError::Generate)?;

    Ok(Json(DataResponse {
        data,
        timestamp: Utc::now(),
    }))
}

/// POST /api/v1/data
///
/// Apply the filter to the records in the request body.
pub async fn process_data(body: Bytes) -> ApiResult<Json<ProcessResponse>> {
    let data = process(&body).map_err(ApiError::Process)?;

    Ok(Json(ProcessResponse {
        count: data.len(),
        data,
        timestamp: Utc::now(),
    }))
}

/// GET /api/v1/employees/summary
pub async fn employee_summary() -> Json<EmployeeSummary> {
    Json(summarize(&employees()))
}

/// Resolve query parameters into a (possibly filtered) dataset
fn generate(config: &GeneratorConfig, params: &DataQuery) -> DataResult<Dataset> {
    let kind_name = non_empty(params.kind.as_deref()).unwrap_or("scatter");
    let kind = match kind_name.parse::<DatasetKind>() {
        Ok(kind) => kind,
        Err(_) => {
            tracing::debug!(kind = kind_name, "Unknown dataset type, returning empty data");
            return Ok(Dataset::Empty);
        }
    };

    let count = parse_count(params.count.as_deref(), config.default_count, config.max_count)?;
    let filters = parse_filters(params)?;

    let mut generator = match non_empty(params.seed.as_deref()) {
        Some(seed) => DataGenerator::seeded(
            seed.parse()
                .map_err(|_| DataError::invalid(format!("seed is not an unsigned integer: {}", seed)))?,
        ),
        None => DataGenerator::from_entropy(),
    };

    let dataset = generator.generate(kind, count)?;

    // Only scatter requests are filtered; the other shapes come back whole
    if kind == DatasetKind::Scatter && filters.is_active() {
        let before = dataset.len();
        let dataset = dataset.filtered(&filters);
        tracing::debug!(kind = %kind, before, after = dataset.len(), "Applied filters");
        Ok(dataset)
    } else {
        Ok(dataset)
    }
}

fn parse_filters(params: &DataQuery) -> DataResult<Filters> {
    let threshold = match non_empty(params.threshold.as_deref()) {
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite())
            .ok_or_else(|| DataError::invalid(format!("threshold is not a number: {}", raw)))?,
        None => 0.0,
    };

    Ok(Filters {
        threshold,
        category: non_empty(params.category.as_deref()).map(str::to_string),
    })
}

/// Decode a filter request and run it
fn process(body: &[u8]) -> DataResult<Vec<JsonRecord>> {
    let request: ProcessRequest = serde_json::from_slice(body)
        .map_err(|e| DataError::Internal(format!("malformed request body: {}", e)))?;

    let records = JsonRecord::from_values(request.data)?;
    let received = records.len();
    let filtered = request.filters.apply(records);

    tracing::debug!(received, kept = filtered.len(), "Filtered uploaded records");
    Ok(filtered)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
