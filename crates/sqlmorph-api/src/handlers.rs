use crate::{ApiError, ApiResult, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlmorph_ai::{samples_for, SampleSnippet};
use sqlmorph_core::SqlDialect;

#[derive(Debug, Deserialize)]
pub struct ConversionRequest {
    pub source_code: String,
    pub source_type: SqlDialect,
    pub target_type: SqlDialect,
}

#[derive(Debug, Serialize)]
pub struct ConversionResponse {
    pub converted_code: String,
    pub source_type: SqlDialect,
    pub target_type: SqlDialect,
}

#[derive(Debug, Deserialize)]
pub struct OptimizationRequest {
    pub sql_code: String,
    pub sql_type: SqlDialect,
}

#[derive(Debug, Serialize)]
pub struct OptimizationResponse {
    pub optimized_code: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct SamplesResponse {
    pub dialect: SqlDialect,
    pub samples: &'static [SampleSnippet],
}

/// Convert SQL code between dialects.
pub async fn convert_sql(
    State(state): State<AppState>,
    Json(request): Json<ConversionRequest>,
) -> ApiResult<Json<ConversionResponse>> {
    let converted_code = state
        .service
        .convert(&request.source_code, request.source_type, request.target_type)
        .await?;

    Ok(Json(ConversionResponse {
        converted_code,
        source_type: request.source_type,
        target_type: request.target_type,
    }))
}

/// Optimize SQL code for one dialect.
pub async fn optimize_sql(
    State(state): State<AppState>,
    Json(request): Json<OptimizationRequest>,
) -> ApiResult<Json<OptimizationResponse>> {
    let optimized_code = state
        .service
        .optimize(&request.sql_code, request.sql_type)
        .await?;

    Ok(Json(OptimizationResponse { optimized_code }))
}

/// Service metadata and endpoint directory.
pub async fn info() -> Json<Value> {
    Json(json!({
        "message": "SqlMorph API",
        "version": env!("CARGO_PKG_VERSION"),
        "supported_databases": SqlDialect::ALL,
        "endpoints": {
            "/convert": "Convert SQL between databases",
            "/optimize": "Optimize SQL for specific database",
            "/examples/{dialect}": "Sample routines for a dialect"
        }
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Sample routines for one dialect.
pub async fn dialect_samples(Path(dialect): Path<String>) -> ApiResult<Json<SamplesResponse>> {
    let dialect: SqlDialect = dialect
        .parse()
        .map_err(ApiError::BadRequest)?;

    Ok(Json(SamplesResponse {
        dialect,
        samples: samples_for(dialect),
    }))
}
