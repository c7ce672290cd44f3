//! Customer listings.

use sqlx::PgPool;

use crate::errors::DataAccessError;
use crate::models::customer::{CustomerField, CustomerSummary, CustomerSummaryRow};

use super::contains_pattern;

/// Fetch every customer's id and name, alphabetically.
pub async fn fetch_customers(pool: &PgPool) -> Result<Vec<CustomerField>, DataAccessError> {
    let rows = sqlx::query_as::<_, CustomerField>(
        r#"
        SELECT
            id,
            name
        FROM customers
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(DataAccessError::store("Failed to fetch all customers."))?;
    Ok(rows)
}

/// Fetch customers whose name or email contains `query`, with invoice totals.
///
/// Customers without invoices are included with zero totals.
pub async fn fetch_filtered_customers(
    pool: &PgPool,
    query: &str,
) -> Result<Vec<CustomerSummary>, DataAccessError> {
    let rows = sqlx::query_as::<_, CustomerSummaryRow>(
        r#"
        SELECT
            customers.id,
            customers.name,
            customers.email,
            customers.image_url,
            COUNT(invoices.id) AS total_invoices,
            COALESCE(SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END), 0)::BIGINT AS total_pending,
            COALESCE(SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END), 0)::BIGINT AS total_paid
        FROM customers
        LEFT JOIN invoices ON customers.id = invoices.customer_id
        WHERE
            customers.name ILIKE $1 OR
            customers.email ILIKE $1
        GROUP BY customers.id, customers.name, customers.email, customers.image_url
        ORDER BY customers.name ASC
        "#,
    )
    .bind(contains_pattern(query))
    .fetch_all(pool)
    .await
    .map_err(DataAccessError::store("Failed to fetch customer table."))?;

    Ok(rows.into_iter().map(CustomerSummary::from).collect())
}
