//! Data access layer: read-only queries over the dashboard store.
//!
//! Every function takes the pool it queries explicitly and issues a single
//! statement. Store failures are logged here and surfaced as
//! [`DataAccessError`](crate::errors::DataAccessError) with a fixed message.

pub mod customers;
pub mod dashboard;
pub mod invoices;

/// `ILIKE` pattern matching `query` anywhere in the column.
pub(crate) fn contains_pattern(query: &str) -> String {
    format!("%{query}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_wraps_query() {
        assert_eq!(contains_pattern("lee"), "%lee%");
        assert_eq!(contains_pattern(""), "%%");
    }
}
