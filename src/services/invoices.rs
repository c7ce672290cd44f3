//! Invoice table search, pagination and single-invoice lookup.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::DataAccessError;
use crate::models::invoice::{InvoiceForm, InvoiceRow, InvoiceTableRow};
use crate::models::pagination::{total_pages, PageRequest};

use super::contains_pattern;

/// Search predicate shared by the table and page-count queries.
/// `$1` is the `%query%` pattern, referenced by every comparison.
const INVOICE_SEARCH_PREDICATE: &str = r#"
    customers.name ILIKE $1 OR
    customers.email ILIKE $1 OR
    invoices.amount::text ILIKE $1 OR
    invoices.date::text ILIKE $1 OR
    invoices.status ILIKE $1
"#;

/// Fetch one page of invoices matching `query`, newest first.
///
/// `page.page` is 1-indexed and is expected to be at least 1.
pub async fn fetch_filtered_invoices(
    pool: &PgPool,
    query: &str,
    page: &PageRequest,
) -> Result<Vec<InvoiceTableRow>, DataAccessError> {
    let sql = format!(
        r#"
        SELECT
            invoices.id,
            invoices.customer_id,
            invoices.amount,
            invoices.date,
            invoices.status,
            customers.name,
            customers.email,
            customers.image_url
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        WHERE {INVOICE_SEARCH_PREDICATE}
        ORDER BY invoices.date DESC, invoices.id
        LIMIT $2 OFFSET $3
        "#
    );

    let rows = sqlx::query_as::<_, InvoiceTableRow>(&sql)
        .bind(contains_pattern(query))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await
        .map_err(DataAccessError::store("Failed to fetch invoices."))?;

    Ok(rows)
}

/// Number of `page_size` pages needed for invoices matching `query`; at least 1.
pub async fn fetch_invoices_pages(
    pool: &PgPool,
    query: &str,
    page_size: i64,
) -> Result<i64, DataAccessError> {
    let sql = format!(
        r#"
        SELECT COUNT(*)
        FROM invoices
        JOIN customers ON invoices.customer_id = customers.id
        WHERE {INVOICE_SEARCH_PREDICATE}
        "#
    );

    let count = sqlx::query_scalar::<_, i64>(&sql)
        .bind(contains_pattern(query))
        .fetch_one(pool)
        .await
        .map_err(DataAccessError::store("Failed to fetch total number of invoices."))?;

    Ok(total_pages(count, page_size))
}

/// Fetch a single invoice for editing, amount converted to display units.
pub async fn fetch_invoice_by_id(pool: &PgPool, id: Uuid) -> Result<InvoiceForm, DataAccessError> {
    let row = sqlx::query_as::<_, InvoiceRow>(
        r#"
        SELECT
            invoices.id,
            invoices.customer_id,
            invoices.amount,
            invoices.status
        FROM invoices
        WHERE invoices.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(DataAccessError::store("Failed to fetch invoice."))?;

    match row {
        Some(row) => Ok(row.into()),
        None => {
            tracing::debug!(invoice_id = %id, "Invoice not found");
            Err(DataAccessError::NotFound {
                message: "Invoice not found.",
            })
        }
    }
}
