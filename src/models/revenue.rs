//! Monthly revenue aggregate.

use serde::Serialize;
use sqlx::FromRow;

/// Precomputed revenue for one month, passed through as stored.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}
