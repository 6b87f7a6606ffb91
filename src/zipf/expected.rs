//! Theoretical expected counts under a Zipf model.
use crate::error::Error;

use super::zeta::zeta_unchecked;

/// Expected count at each rank for a sample of `total` draws from a Zipf
/// distribution with the given exponent: `total * k^-exponent / ζ(exponent)`.
///
/// The output is finite, non-negative and non-increasing over increasing
/// ranks. Fails with [Error::InvalidParameter] unless `exponent > 1` and
/// every rank is ≥ 1.
pub fn expected_counts(ranks: &[u64], exponent: f64, total: u64) -> Result<Vec<f64>, Error> {
    if !exponent.is_finite() || exponent <= 1.0 {
        return Err(Error::InvalidParameter(format!(
            "expected counts require exponent > 1, got {}",
            exponent
        )));
    }
    if ranks.iter().any(|&k| k < 1) {
        return Err(Error::InvalidParameter(
            "expected counts require ranks >= 1".to_string(),
        ));
    }

    let z = zeta_unchecked(exponent);
    Ok(ranks
        .iter()
        .map(|&k| total as f64 * (k as f64).powf(-exponent) / z)
        .collect())
}
