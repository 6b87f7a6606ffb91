//! Maximum-likelihood power-law fit.
use log::debug;

use super::zeta::zeta_terms;
use crate::error::{Error, FitError};

/// exponent search range; a solution stuck on either bound is reported as
/// a convergence failure, not a fit
const EXPONENT_MIN: f64 = 1.000_001;
const EXPONENT_MAX: f64 = 64.0;
const MAX_ITERS: usize = 64;

/// Parameters of a fitted discrete power law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZipfFit {
    exponent: f64,
    location: f64,
    scale: f64,
}

impl ZipfFit {
    /// Get a reference to the fit's exponent.
    pub fn exponent(&self) -> &f64 {
        &self.exponent
    }

    /// Always 0: the support starts at rank/value 1 and is never shifted.
    ///
    /// Callers must make sure their value domain actually starts at 1;
    /// shifted data silently misrepresents the fit.
    pub fn location(&self) -> &f64 {
        &self.location
    }

    /// Normalized mass at rank 1, `1/ζ(exponent)`.
    pub fn scale(&self) -> &f64 {
        &self.scale
    }
}

/// Fit a discrete Zipf (zeta) model to samples or weights, location pinned
/// to 0.
///
/// Newton iteration on the log-likelihood gradient
/// `-mean(ln v) - ζ'(a)/ζ(a)`, which is strictly decreasing in `a`, so the
/// interior maximum is unique whenever it exists.
///
/// Non-positive and non-finite values are dropped before fitting. Fails
/// with [FitError::EmptyInput] on empty input, [FitError::DegenerateInput]
/// when nothing positive remains or every value is at most 1 (the
/// likelihood then grows with the exponent forever), and
/// [FitError::NoConvergence] when the iteration limit runs out or the
/// solution lands on the exponent clamp.
pub fn fit_zipf(values: &[f64]) -> Result<ZipfFit, Error> {
    if values.is_empty() {
        return Err(FitError::EmptyInput.into());
    }
    let positive: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0)
        .collect();
    if positive.is_empty() {
        return Err(FitError::DegenerateInput.into());
    }

    let n = positive.len() as f64;
    let mean_log = positive.iter().map(|v| v.ln()).sum::<f64>() / n;
    if mean_log <= 0.0 {
        return Err(FitError::DegenerateInput.into());
    }

    let mut s = 2.0_f64;
    let mut iterations = 0usize;
    let mut converged = false;

    for iteration in 0..MAX_ITERS {
        iterations = iteration + 1;
        let (z, z_prime, z_second) = zeta_terms(s);
        if !z.is_finite() || z <= 0.0 {
            break;
        }

        let grad = -mean_log - z_prime / z;
        if !grad.is_finite() {
            break;
        }
        if grad.abs() < 1e-9 {
            converged = true;
            break;
        }

        let curvature = z_second * z - z_prime * z_prime;
        let hess = -curvature / (z * z);
        if !hess.is_finite() {
            break;
        }

        let step = if hess.abs() > 1e-12 {
            grad / hess
        } else {
            grad.signum() * 0.05
        };
        let next = (s - step).clamp(EXPONENT_MIN, EXPONENT_MAX);
        if (next - s).abs() < 1e-10 {
            s = next;
            converged = true;
            break;
        }
        s = next;
    }

    if !converged || s <= EXPONENT_MIN || s >= EXPONENT_MAX {
        return Err(FitError::NoConvergence { iterations }.into());
    }

    let (z, _, _) = zeta_terms(s);
    debug!("fit converged in {} iterations: a={:.6}", iterations, s);
    Ok(ZipfFit {
        exponent: s,
        location: 0.0,
        scale: 1.0 / z,
    })
}
