use crate::utils::error::{Result, SorterError};

/// Population variance of `values`:
/// `sum((v - mean)^2) / len` with `mean = sum(values) / len`.
///
/// Empty input is an error; callers always hand in one value per group, and
/// the group count is at least one by construction.
pub fn population_variance(values: &[u32]) -> Result<f64> {
    if values.is_empty() {
        return Err(SorterError::EmptyDataSet);
    }

    let len = values.len() as f64;
    let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / len;

    let squared_diffs = values
        .iter()
        .map(|&v| {
            let diff = f64::from(v) - mean;
            diff * diff
        })
        .sum::<f64>();

    Ok(squared_diffs / len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variance_of_uniform_data_is_zero() {
        assert_eq!(population_variance(&[4, 4, 4, 4]).unwrap(), 0.0);
        assert_eq!(population_variance(&[0]).unwrap(), 0.0);
    }

    #[test]
    fn test_variance_matches_hand_computation() {
        // mean = 2, diffs (-2, 0, 2), sum of squares 8, over 3 values
        let variance = population_variance(&[0, 2, 4]).unwrap();
        assert!((variance - 8.0 / 3.0).abs() < 1e-12);

        // mean = 2.5, diffs (-1.5, -0.5, 0.5, 1.5) -> 5 / 4
        let variance = population_variance(&[1, 2, 3, 4]).unwrap();
        assert!((variance - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_variance_of_empty_data_fails() {
        assert!(matches!(
            population_variance(&[]),
            Err(SorterError::EmptyDataSet)
        ));
    }
}
