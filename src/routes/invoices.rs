//! Invoice routes: searchable table, page count and single invoice.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::errors::{ApiResponse, AppError};
use crate::models::invoice::{InvoiceForm, InvoiceTableRow};
use crate::models::pagination::{PageRequest, Paged, ITEMS_PER_PAGE};
use crate::services::invoices as invoice_service;
use crate::AppState;

use super::TextSearch;

/// Query string of the invoice table: `?query=...&page=...`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct InvoiceSearch {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub query: String,
    #[validate(range(min = 1, max = 1_000_000))]
    pub page: Option<i64>,
}

impl InvoiceSearch {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1))
    }
}

/// GET /api/v1/invoices — one page of matching invoices plus the page count.
pub async fn list(
    State(state): State<AppState>,
    Query(search): Query<InvoiceSearch>,
) -> Result<Json<ApiResponse<Paged<InvoiceTableRow>>>, AppError> {
    search.validate()?;
    let page = search.page_request();

    let (items, total_pages) = tokio::try_join!(
        invoice_service::fetch_filtered_invoices(&state.db, &search.query, &page),
        invoice_service::fetch_invoices_pages(&state.db, &search.query, page.page_size),
    )?;

    Ok(ApiResponse::success(Paged {
        items,
        page: page.page,
        total_pages,
    }))
}

/// GET /api/v1/invoices/pages — page count for a search.
pub async fn pages(
    State(state): State<AppState>,
    Query(search): Query<TextSearch>,
) -> Result<Json<ApiResponse<i64>>, AppError> {
    search.validate()?;
    let pages =
        invoice_service::fetch_invoices_pages(&state.db, &search.query, ITEMS_PER_PAGE).await?;
    Ok(ApiResponse::success(pages))
}

/// GET /api/v1/invoices/:id — a single invoice for the edit form.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<InvoiceForm>>, AppError> {
    let invoice = invoice_service::fetch_invoice_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(invoice))
}
