//! Row types, presentation records and value types for the dashboard.

pub mod customer;
pub mod invoice;
pub mod money;
pub mod pagination;
pub mod revenue;
