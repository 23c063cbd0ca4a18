//! FILENAME: data-utils/src/convert.rs
//! Conversion from primitive float slices to nullable numeric sequences.
//!
//! The data model stores cells as `Option<f64>` so that a missing value is
//! distinguishable from zero. These helpers lift plain `f64` data into that
//! shape, element for element, without rounding. Slices cannot be null in
//! Rust, so the conversions are infallible.

/// Converts a slice of doubles into a fresh nullable sequence of the same
/// length, where the i-th output is `Some(data[i])`.
pub fn create_number_array(data: &[f64]) -> Vec<Option<f64>> {
    data.iter().copied().map(Some).collect()
}

/// Converts nested double data row by row. Each output row has the same
/// length as its input row; heterogeneous row lengths are preserved, never
/// forced into a rectangle.
pub fn create_number_array_2d(data: &[Vec<f64>]) -> Vec<Vec<Option<f64>>> {
    data.iter().map(|row| create_number_array(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.0001;

    #[test]
    fn test_create_number_array_valid_data() {
        let input = [1.5, 2.5, 3.5];
        let result = create_number_array(&input);

        assert_eq!(result.len(), 3);
        for (i, expected) in input.iter().enumerate() {
            let value = result[i].expect("element should not be null");
            assert!((value - expected).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_create_number_array_exact_roundtrip() {
        // Values survive exactly, including ones with no short decimal form.
        let input = [0.1 + 0.2, f64::MIN_POSITIVE, -0.0, 1e300];
        let result = create_number_array(&input);

        let unboxed: Vec<f64> = result.into_iter().map(|v| v.unwrap()).collect();
        for (a, b) in unboxed.iter().zip(input.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_create_number_array_empty() {
        assert!(create_number_array(&[]).is_empty());
    }

    #[test]
    fn test_create_number_array_2d_valid_data() {
        let input = vec![vec![1.1, 1.2], vec![2.1, 2.2]];
        let result = create_number_array_2d(&input);

        assert_eq!(result.len(), 2);
        for (r, row) in input.iter().enumerate() {
            assert_eq!(result[r].len(), row.len());
            for (c, expected) in row.iter().enumerate() {
                let value = result[r][c].expect("element should not be null");
                assert!((value - expected).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_create_number_array_2d_preserves_ragged_shape() {
        let input = vec![vec![1.0, 2.0, 3.0], vec![4.0], Vec::new()];
        let result = create_number_array_2d(&input);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].len(), 3);
        assert_eq!(result[1].len(), 1);
        assert_eq!(result[2].len(), 0);
    }
}
