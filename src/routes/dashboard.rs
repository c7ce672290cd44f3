//! Dashboard routes: overview page data and its individual widgets.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::models::invoice::LatestInvoice;
use crate::models::revenue::Revenue;
use crate::services::dashboard::{self, CardData, DashboardOverview, LATEST_INVOICES_LIMIT};
use crate::AppState;

/// GET /api/v1/dashboard — revenue, latest invoices and cards in one payload.
pub async fn overview(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardOverview>>, AppError> {
    let overview = dashboard::fetch_overview(&state.db).await?;
    Ok(ApiResponse::success(overview))
}

/// GET /api/v1/dashboard/revenue — monthly revenue for the chart.
pub async fn revenue(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Revenue>>>, AppError> {
    let revenue = dashboard::fetch_revenue(&state.db).await?;
    Ok(ApiResponse::success(revenue))
}

/// GET /api/v1/dashboard/latest-invoices — the five newest invoices.
pub async fn latest_invoices(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LatestInvoice>>>, AppError> {
    let invoices = dashboard::fetch_latest_invoices(&state.db, LATEST_INVOICES_LIMIT).await?;
    Ok(ApiResponse::success(invoices))
}

/// GET /api/v1/dashboard/cards — invoice and customer totals.
pub async fn cards(State(state): State<AppState>) -> Result<Json<ApiResponse<CardData>>, AppError> {
    let cards = dashboard::fetch_card_data(&state.db).await?;
    Ok(ApiResponse::success(cards))
}
