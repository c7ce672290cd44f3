//! Monetary amounts: integer cents from the store, display formatting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount in integer cents, the unit every amount is stored in.
///
/// Conversion to display units happens only through [`Cents::to_units`] or
/// [`format_currency`], so a value can never be divided by 100 twice.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Amount in display currency units (e.g. dollars).
    pub fn to_units(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Format as a display currency string, e.g. `$1,234.56`.
    pub fn format(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = group_thousands(abs / 100);
        let fraction = abs % 100;
        format!("{sign}${whole}.{fraction:02}")
    }
}

/// Format an amount in cents as US dollars. A missing amount formats as zero.
pub fn format_currency(amount: Option<Cents>) -> String {
    amount.unwrap_or(Cents::ZERO).format()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
