//! Customer projections: select options and the summary table.

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::money::{format_currency, Cents};

/// Minimal customer projection for select inputs.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomerField {
    pub id: Uuid,
    pub name: String,
}

/// Customer with per-status invoice totals, formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}

/// Raw aggregate row behind [`CustomerSummary`].
#[derive(Debug, FromRow)]
pub(crate) struct CustomerSummaryRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: Option<i64>,
    pub total_pending: Option<Cents>,
    pub total_paid: Option<Cents>,
}

impl From<CustomerSummaryRow> for CustomerSummary {
    fn from(row: CustomerSummaryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            total_invoices: row.total_invoices.unwrap_or(0),
            total_pending: format_currency(row.total_pending),
            total_paid: format_currency(row.total_paid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_formats_totals() {
        let row = CustomerSummaryRow {
            id: Uuid::new_v4(),
            name: "Lee Robinson".to_string(),
            email: "lee@robinson.com".to_string(),
            image_url: "/customers/lee-robinson.png".to_string(),
            total_invoices: Some(3),
            total_pending: Some(Cents(44_800)),
            total_paid: None,
        };
        let summary = CustomerSummary::from(row);
        assert_eq!(summary.total_invoices, 3);
        assert_eq!(summary.total_pending, "$448.00");
        assert_eq!(summary.total_paid, "$0.00");
    }
}
