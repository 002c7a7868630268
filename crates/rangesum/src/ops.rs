//! Direct range-sum operations
//!
//! Every call recomputes from the array. Bounds are checked up front so a
//! rejected call never touches the array.

use crate::error::{Error, Result};

/// Check that `index` lies in `[0, len)`
pub fn check_index(len: usize, index: usize) -> Result<()> {
    if index >= len {
        return Err(Error::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// Check that `[left, right]` is a valid inclusive range over `len` elements
pub fn check_range(len: usize, left: usize, right: usize) -> Result<()> {
    check_index(len, left)?;
    check_index(len, right)?;
    if left > right {
        return Err(Error::InvalidRange { left, right });
    }
    Ok(())
}

/// Sum of `array[left..=right]`
///
/// # Arguments
/// * `array` - Values to sum over
/// * `left` - First index (inclusive)
/// * `right` - Last index (inclusive)
///
/// # Returns
/// * `Result<i64>` - The range sum, or `SumOverflow` if it leaves `i64`
pub fn range_sum(array: &[i64], left: usize, right: usize) -> Result<i64> {
    check_range(array.len(), left, right)?;
    array[left..=right]
        .iter()
        .try_fold(0i64, |acc, &v| acc.checked_add(v))
        .ok_or(Error::SumOverflow { left, right })
}

/// Set `array[index] = value`
pub fn update(array: &mut [i64], index: usize, value: i64) -> Result<()> {
    check_index(array.len(), index)?;
    array[index] = value;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_sum_basic() {
        let array = [1, 2, 3, 4, 5];

        assert_eq!(range_sum(&array, 1, 3).unwrap(), 9);
        assert_eq!(range_sum(&array, 0, 4).unwrap(), 15);
        assert_eq!(range_sum(&array, 2, 2).unwrap(), 3);
    }

    #[test]
    fn test_range_sum_negative_values() {
        let array = [-5, 10, -3];
        assert_eq!(range_sum(&array, 0, 2).unwrap(), 2);
    }

    #[test]
    fn test_range_sum_out_of_range() {
        let array = [1, 2, 3];

        assert_eq!(
            range_sum(&array, 1, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            range_sum(&array, 5, 6),
            Err(Error::IndexOutOfRange { index: 5, len: 3 })
        );
    }

    #[test]
    fn test_range_sum_reversed() {
        let array = [1, 2, 3];
        assert_eq!(
            range_sum(&array, 2, 1),
            Err(Error::InvalidRange { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_range_sum_empty_array() {
        let array: [i64; 0] = [];
        assert!(matches!(
            range_sum(&array, 0, 0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_range_sum_overflow() {
        let array = [i64::MAX, 1, i64::MIN];

        assert_eq!(
            range_sum(&array, 0, 1),
            Err(Error::SumOverflow { left: 0, right: 1 })
        );
        assert_eq!(range_sum(&array, 1, 2), Ok(i64::MIN + 1));
        assert_eq!(
            range_sum(&[i64::MIN, -1], 0, 1),
            Err(Error::SumOverflow { left: 0, right: 1 })
        );
    }

    #[test]
    fn test_update() {
        let mut array = [1, 2, 3, 4, 5];

        update(&mut array, 2, 100).unwrap();
        assert_eq!(array, [1, 2, 100, 4, 5]);
        assert_eq!(range_sum(&array, 1, 3).unwrap(), 106);
    }

    #[test]
    fn test_update_out_of_range() {
        let mut array = [1, 2, 3];

        let result = update(&mut array, 3, 9);
        assert_eq!(result, Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(array, [1, 2, 3]);
    }
}
