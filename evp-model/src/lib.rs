//! Vehicle record model and CSV adapter for the EV population dataset.
//!
//! This crate is the boundary between the upstream delimited file (fixed
//! column names, free-text categories, 0-as-unknown numeric sentinels) and
//! the typed records every aggregate consumes. Categorization and numeric
//! normalization happen exactly once, here.

pub mod category;
pub mod record;
