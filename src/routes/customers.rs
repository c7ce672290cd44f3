//! Customer routes: select options and the filtered summary table.

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::errors::{ApiResponse, AppError};
use crate::models::customer::{CustomerField, CustomerSummary};
use crate::services::customers as customer_service;
use crate::AppState;

use super::TextSearch;

/// GET /api/v1/customers — all customers' ids and names.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CustomerField>>>, AppError> {
    let customers = customer_service::fetch_customers(&state.db).await?;
    Ok(ApiResponse::success(customers))
}

/// GET /api/v1/customers/search — customers matching a name or email fragment.
pub async fn search(
    State(state): State<AppState>,
    Query(search): Query<TextSearch>,
) -> Result<Json<ApiResponse<Vec<CustomerSummary>>>, AppError> {
    search.validate()?;
    let customers = customer_service::fetch_filtered_customers(&state.db, &search.query).await?;
    Ok(ApiResponse::success(customers))
}
