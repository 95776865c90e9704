//! HTTP handlers for the REST API.
//!
//! Each handler validates its query parameters and delegates to the
//! service layer.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    ClimatePage, DataEnvelope, FilterError, FilterParams, HealthResponse, LocationListResponse,
    MetricListResponse, PageParams, SummaryResponse, TrendsResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Catalog
// =============================================================================

/// GET /api/v1/locations
pub async fn list_locations(State(state): State<AppState>) -> HandlerResult<LocationListResponse> {
    let locations = db_services::list_locations(state.repository.as_ref()).await?;
    Ok(Json(DataEnvelope::new(locations)))
}

/// GET /api/v1/metrics
pub async fn list_metrics(State(state): State<AppState>) -> HandlerResult<MetricListResponse> {
    let metrics = db_services::list_metrics(state.repository.as_ref()).await?;
    Ok(Json(DataEnvelope::new(metrics)))
}

// =============================================================================
// Climate data
// =============================================================================

/// GET /api/v1/climate
///
/// Paginated, newest first. Accepts the shared filter parameters plus
/// `page` and `per_page`.
pub async fn list_climate(
    State(state): State<AppState>,
    Query(filter_params): Query<FilterParams>,
    Query(page_params): Query<PageParams>,
) -> HandlerResult<ClimatePage> {
    let filter = filter_params.parse()?;
    let (page, per_page) = page_params.resolve();
    let page_data =
        db_services::fetch_climate_page(state.repository.as_ref(), &filter, page, per_page)
            .await?;
    Ok(Json(page_data))
}

// =============================================================================
// Analytics
// =============================================================================

/// GET /api/v1/summary
pub async fn get_summary(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> HandlerResult<SummaryResponse> {
    let filter = params.parse().map_err(FilterError::terse)?;
    let summary = services::get_summary_data(state.repository.as_ref(), &filter).await?;
    Ok(Json(DataEnvelope::new(summary)))
}

/// GET /api/v1/trends
pub async fn get_trends(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> HandlerResult<TrendsResponse> {
    let filter = params.parse().map_err(FilterError::terse)?;
    let trends = services::get_trends_data(state.repository.as_ref(), &filter).await?;
    Ok(Json(DataEnvelope::new(trends)))
}
