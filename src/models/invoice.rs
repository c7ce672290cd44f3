//! Invoice rows and the presentation records built from them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::money::Cents;

/// Invoice payment status as stored in `invoices.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

/// A status string that is neither `pending` nor `paid`.
#[derive(Debug, thiserror::Error)]
#[error("unknown invoice status: {0}")]
pub struct UnknownStatus(pub String);

impl TryFrom<String> for InvoiceStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            _ => Err(UnknownStatus(value)),
        }
    }
}

/// Row for the "latest invoices" card, amount already formatted.
#[derive(Debug, Clone, Serialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: String,
}

/// Raw row behind [`LatestInvoice`].
#[derive(Debug, FromRow)]
pub(crate) struct LatestInvoiceRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: Option<Cents>,
}

/// Row of the searchable invoice table. The amount stays in cents.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InvoiceTableRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: NaiveDate,
    pub amount: Cents,
    #[sqlx(try_from = "String")]
    pub status: InvoiceStatus,
}

/// A single invoice loaded for the edit form, amount in display units.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: InvoiceStatus,
}

/// Raw row behind [`InvoiceForm`].
#[derive(Debug, FromRow)]
pub(crate) struct InvoiceRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: Option<Cents>,
    #[sqlx(try_from = "String")]
    pub status: InvoiceStatus,
}

impl From<InvoiceRow> for InvoiceForm {
    fn from(row: InvoiceRow) -> Self {
        Self {
            id: row.id,
            customer_id: row.customer_id,
            amount: row.amount.unwrap_or_default().to_units(),
            status: row.status,
        }
    }
}

impl From<LatestInvoiceRow> for LatestInvoice {
    fn from(row: LatestInvoiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            amount: super::money::format_currency(row.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values() {
        assert_eq!(InvoiceStatus::try_from("paid".to_string()).unwrap(), InvoiceStatus::Paid);
        assert_eq!(
            InvoiceStatus::try_from("pending".to_string()).unwrap(),
            InvoiceStatus::Pending
        );
    }

    #[test]
    fn status_rejects_unknown_values() {
        let err = InvoiceStatus::try_from("Paid".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "unknown invoice status: Paid");
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(InvoiceStatus::Pending).unwrap(), "pending");
    }

    #[test]
    fn form_converts_cents_to_units() {
        let row = InvoiceRow {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            amount: Some(Cents(250_000)),
            status: InvoiceStatus::Paid,
        };
        let form = InvoiceForm::from(row);
        assert_eq!(form.amount, Decimal::from(2500));

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["amount"].as_f64(), Some(2500.0));
        assert_eq!(json["status"], "paid");
    }

    #[test]
    fn form_treats_missing_amount_as_zero() {
        let row = InvoiceRow {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            amount: None,
            status: InvoiceStatus::Pending,
        };
        assert_eq!(InvoiceForm::from(row).amount, Decimal::ZERO);
    }

    #[test]
    fn latest_invoice_formats_amount() {
        let row = LatestInvoiceRow {
            id: Uuid::new_v4(),
            name: "Delba de Oliveira".to_string(),
            email: "delba@oliveira.com".to_string(),
            image_url: "/customers/delba-de-oliveira.png".to_string(),
            amount: Some(Cents(15_795)),
        };
        assert_eq!(LatestInvoice::from(row).amount, "$157.95");
    }
}
