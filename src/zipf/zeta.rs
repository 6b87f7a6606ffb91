//! Riemann zeta evaluation.
//!
//! `ζ(a) = Σ k^-a` normalizes the discrete Zipf distribution. The series
//! is summed directly up to a cutoff; the remainder is folded in with
//! Euler–Maclaurin tail corrections, which keeps the relative error below
//! 1e-10 over the whole `a > 1` domain.
use crate::error::Error;

/// switchover from direct summation to the tail formula
const CUTOFF: usize = 128;

/// ζ(a) for `a > 1`.
///
/// Fails with [Error::InvalidParameter] outside the convergence domain.
pub fn zeta(a: f64) -> Result<f64, Error> {
    if !a.is_finite() || a <= 1.0 {
        return Err(Error::InvalidParameter(format!(
            "zeta requires exponent > 1, got {}",
            a
        )));
    }
    Ok(zeta_unchecked(a))
}

pub(crate) fn zeta_unchecked(a: f64) -> f64 {
    let n = CUTOFF as f64;
    let mut head = 0.0_f64;
    for k in 1..CUTOFF {
        head += (k as f64).powf(-a);
    }
    // tail of Σ_{k=N}^∞ k^-a: integral + boundary + curvature corrections
    let tail = n.powf(1.0 - a) / (a - 1.0) + 0.5 * n.powf(-a) + a * n.powf(-a - 1.0) / 12.0
        - a * (a + 1.0) * (a + 2.0) * n.powf(-a - 3.0) / 720.0;
    head + tail
}

/// `(ζ(a), ζ'(a), ζ''(a))` in one pass; the fit's Newton step needs all
/// three.
pub(crate) fn zeta_terms(a: f64) -> (f64, f64, f64) {
    let n = CUTOFF as f64;
    let b = a - 1.0;
    let ln_n = n.ln();

    let mut neg_prime = 0.0_f64;
    let mut second = 0.0_f64;
    for k in 2..CUTOFF {
        let k_f64 = k as f64;
        let ln_k = k_f64.ln();
        let inv_pow = k_f64.powf(-a);
        neg_prime += ln_k * inv_pow;
        second += ln_k * ln_k * inv_pow;
    }

    // Euler–Maclaurin tails for ln(x)·x^-a and ln(x)²·x^-a
    let inv_pow_n = n.powf(-a);
    let prime_tail = n.powf(1.0 - a) * (ln_n / b + 1.0 / (b * b)) + 0.5 * ln_n * inv_pow_n
        - n.powf(-a - 1.0) * (1.0 - a * ln_n) / 12.0;
    let second_tail = n.powf(1.0 - a)
        * (ln_n * ln_n / b + 2.0 * ln_n / (b * b) + 2.0 / (b * b * b))
        + 0.5 * ln_n * ln_n * inv_pow_n
        - n.powf(-a - 1.0) * (2.0 * ln_n - a * ln_n * ln_n) / 12.0;

    (
        zeta_unchecked(a),
        -(neg_prime + prime_tail),
        second + second_tail,
    )
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::{zeta, zeta_terms};

    #[test]
    fn known_values() {
        // ζ(2) = π²/6, ζ(4) = π⁴/90, ζ(3) is Apéry's constant
        assert!((zeta(2.0).unwrap() - PI * PI / 6.0).abs() < 1e-10);
        assert!((zeta(4.0).unwrap() - PI.powi(4) / 90.0).abs() < 1e-10);
        assert!((zeta(3.0).unwrap() - 1.202_056_903_159_594).abs() < 1e-10);
    }

    #[test]
    fn tends_to_one() {
        assert!((zeta(30.0).unwrap() - 1.0).abs() < 1e-8);
    }

    #[test]
    fn diverges_near_one() {
        // ζ(1+ε) ≈ 1/ε + γ
        let z = zeta(1.001).unwrap();
        assert!((z - 1000.577).abs() < 0.01);
    }

    #[test]
    fn rejects_out_of_domain() {
        assert!(zeta(1.0).is_err());
        assert!(zeta(0.5).is_err());
        assert!(zeta(-2.0).is_err());
        assert!(zeta(f64::NAN).is_err());
    }

    #[test]
    fn derivative_matches_finite_difference() {
        for a in [1.5, 2.0, 3.0, 4.0] {
            let (_, prime, second) = zeta_terms(a);
            let h = 1e-6;
            let num_prime = (zeta(a + h).unwrap() - zeta(a - h).unwrap()) / (2.0 * h);
            assert!((prime - num_prime).abs() < 1e-6, "a={}", a);

            // wider step for the second difference, it cancels harder
            let h = 1e-4;
            let num_second =
                (zeta(a + h).unwrap() - 2.0 * zeta(a).unwrap() + zeta(a - h).unwrap()) / (h * h);
            assert!((second - num_second).abs() < 1e-5, "a={}", a);
        }
    }

    #[test]
    fn derivative_is_negative() {
        for a in [1.2, 2.0, 5.0, 10.0] {
            let (z, prime, second) = zeta_terms(a);
            assert!(z > 1.0);
            assert!(prime < 0.0);
            assert!(second > 0.0);
        }
    }
}
