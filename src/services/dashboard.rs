//! Dashboard queries: revenue chart, latest invoices and summary cards.

use serde::Serialize;
use sqlx::PgPool;

use crate::errors::DataAccessError;
use crate::models::invoice::{LatestInvoice, LatestInvoiceRow};
use crate::models::money::{format_currency, Cents};
use crate::models::revenue::Revenue;

/// Number of rows shown in the "latest invoices" card.
pub const LATEST_INVOICES_LIMIT: i64 = 5;

/// Totals shown in the four dashboard cards.
#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

/// Everything the dashboard overview page renders.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub revenue: Vec<Revenue>,
    pub latest_invoices: Vec<LatestInvoice>,
    pub cards: CardData,
}

/// Intermediate row for the card aggregation.
#[derive(Debug, sqlx::FromRow)]
struct CardRow {
    invoice_count: Option<i64>,
    customer_count: Option<i64>,
    paid: Option<Cents>,
    pending: Option<Cents>,
}

impl From<CardRow> for CardData {
    fn from(row: CardRow) -> Self {
        Self {
            number_of_invoices: row.invoice_count.unwrap_or(0),
            number_of_customers: row.customer_count.unwrap_or(0),
            total_paid_invoices: format_currency(row.paid),
            total_pending_invoices: format_currency(row.pending),
        }
    }
}

/// Fetch the overview page data.
///
/// The three queries run concurrently, each in its own implicit read
/// transaction, so they share no snapshot. Any failure fails the overview.
pub async fn fetch_overview(pool: &PgPool) -> Result<DashboardOverview, DataAccessError> {
    let (revenue, latest_invoices, cards) = tokio::try_join!(
        fetch_revenue(pool),
        fetch_latest_invoices(pool, LATEST_INVOICES_LIMIT),
        fetch_card_data(pool),
    )?;

    Ok(DashboardOverview {
        revenue,
        latest_invoices,
        cards,
    })
}

/// Fetch every monthly revenue row as stored.
pub async fn fetch_revenue(pool: &PgPool) -> Result<Vec<Revenue>, DataAccessError> {
    let rows = sqlx::query_as::<_, Revenue>("SELECT month, revenue FROM revenue")
        .fetch_all(pool)
        .await
        .map_err(DataAccessError::store("Failed to fetch revenue data."))?;
    Ok(rows)
}

/// Fetch the `limit` most recent invoices with their customer, amounts formatted.
pub async fn fetch_latest_invoices(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<LatestInvoice>, DataAccessError> {
    let rows = sqlx::query_as::<_, LatestInvoiceRow>(
        r#"
        SELECT invoices.amount, customers.name, customers.image_url, customers.email, invoices.id
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        ORDER BY invoices.date DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(DataAccessError::store("Failed to fetch the latest invoices."))?;

    Ok(rows.into_iter().map(LatestInvoice::from).collect())
}

/// Count invoices and customers and total paid and pending amounts.
pub async fn fetch_card_data(pool: &PgPool) -> Result<CardData, DataAccessError> {
    // Conditional aggregation: rows with the other status contribute 0.
    let row = sqlx::query_as::<_, CardRow>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM invoices) AS invoice_count,
            (SELECT COUNT(*) FROM customers) AS customer_count,
            SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END)::BIGINT AS paid,
            SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END)::BIGINT AS pending
        FROM invoices
        "#,
    )
    .fetch_one(pool)
    .await
    .map_err(DataAccessError::store("Failed to fetch card data."))?;

    Ok(row.into())
}
