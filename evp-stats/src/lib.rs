//! Derived aggregate views over the EV population record set.
//!
//! Every function in this crate is a pure batch transform: it borrows the
//! full record slice, walks it once (or once per grouping), and returns an
//! owned, immutable result struct. Nothing is cached, nothing is mutated,
//! and re-running any aggregate over the same slice yields identical
//! output. The aggregates are independent of each other; only the insight
//! engine (a separate crate) consumes their outputs.
//!
//! Conventions shared by all modules:
//! - grouping uses `BTreeMap`, so iteration order is deterministic;
//! - rankings sort by count descending, then key ascending;
//! - percentages are integer `js_round(count / denominator * 100)` with the
//!   denominator documented per aggregate;
//! - every mean or growth over a possibly-empty subset has a defined
//!   neutral value of 0.

use std::fmt;

pub mod country;
pub mod county;
pub mod distribution;
pub mod rankings;
pub mod summary;
pub mod trend;

/// Model years at or below this floor are excluded from trend and
/// year-over-year growth computations.
pub const TREND_FLOOR_YEAR: i32 = 2010;

/// Errors surfaced by the aggregate layer.
#[derive(Debug, PartialEq, Eq)]
pub enum StatsError {
    /// The record set was empty; summary statistics are undefined.
    EmptyDataset,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::EmptyDataset => write!(f, "empty dataset: no vehicle records loaded"),
        }
    }
}

impl std::error::Error for StatsError {}
