//! # rangesum
//!
//! Range-sum queries over a mutable `i64` array.
//!
//! ## Overview
//! - **ops**: direct (uncached) inclusive range sums and point updates
//! - **query**: the `Range`/`Update` query record and the [`RangeQuery`]
//!   strategy trait that cached and uncached paths both implement
//!
//! The array is always owned by the caller; strategies borrow it per call.

#![warn(missing_docs)]

mod error;
mod ops;
mod query;

pub use error::{Error, Result};
pub use ops::{check_index, check_range, range_sum, update};
pub use query::{process_queries, Direct, Query, RangeQuery};
