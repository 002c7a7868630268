//! Query records and the strategy seam
//!
//! A workload is a sequence of [`Query`] values. Any [`RangeQuery`]
//! implementation can answer it; [`Direct`] is the uncached baseline.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ops;

/// A single workload operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum Query {
    /// Inclusive range sum over `[left, right]`
    Range {
        /// First index
        left: usize,
        /// Last index
        right: usize,
    },
    /// Point write `array[index] = value`
    Update {
        /// Index to write
        index: usize,
        /// New value
        value: i64,
    },
}

/// A strategy for answering range-sum queries over a caller-owned array
pub trait RangeQuery {
    /// Short label used in reports
    fn name(&self) -> &'static str;

    /// Sum of `array[left..=right]`
    fn range_sum(&mut self, array: &[i64], left: usize, right: usize) -> Result<i64>;

    /// Set `array[index] = value`, keeping any derived state consistent
    fn update(&mut self, array: &mut [i64], index: usize, value: i64) -> Result<()>;
}

/// Uncached strategy: every range sum is recomputed
#[derive(Debug, Default, Clone, Copy)]
pub struct Direct;

impl RangeQuery for Direct {
    fn name(&self) -> &'static str {
        "no-cache"
    }

    fn range_sum(&mut self, array: &[i64], left: usize, right: usize) -> Result<i64> {
        ops::range_sum(array, left, right)
    }

    fn update(&mut self, array: &mut [i64], index: usize, value: i64) -> Result<()> {
        ops::update(array, index, value)
    }
}

/// Run `queries` in order against `strategy`
///
/// # Returns
/// * `Result<Vec<i64>>` - One sum per `Range` query, in stream order.
///   Stops at the first rejected query.
pub fn process_queries<S: RangeQuery + ?Sized>(
    strategy: &mut S,
    array: &mut [i64],
    queries: &[Query],
) -> Result<Vec<i64>> {
    let mut sums = Vec::new();
    for query in queries {
        match *query {
            Query::Range { left, right } => sums.push(strategy.range_sum(array, left, right)?),
            Query::Update { index, value } => strategy.update(array, index, value)?,
        }
    }
    Ok(sums)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_process_direct() {
        let mut array = vec![1, 2, 3, 4, 5];
        let queries = [
            Query::Range { left: 1, right: 3 },
            Query::Update { index: 2, value: 100 },
            Query::Range { left: 1, right: 3 },
            Query::Range { left: 0, right: 0 },
        ];

        let sums = process_queries(&mut Direct, &mut array, &queries).unwrap();

        assert_eq!(sums, vec![9, 106, 1]);
        assert_eq!(array, vec![1, 2, 100, 4, 5]);
    }

    #[test]
    fn test_process_stops_on_error() {
        let mut array = vec![1, 2, 3];
        let queries = [
            Query::Update { index: 0, value: 10 },
            Query::Range { left: 0, right: 9 },
            Query::Update { index: 1, value: 20 },
        ];

        let result = process_queries(&mut Direct, &mut array, &queries);

        assert_eq!(result, Err(Error::IndexOutOfRange { index: 9, len: 3 }));
        assert_eq!(array, vec![10, 2, 3]);
    }

    #[test]
    fn test_query_json() {
        let query = Query::Update { index: 4, value: -2 };
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"op":"Update","index":4,"value":-2}"#);

        let parsed: Query = serde_json::from_str(r#"{"op":"Range","left":1,"right":3}"#).unwrap();
        assert_eq!(parsed, Query::Range { left: 1, right: 3 });
    }
}
