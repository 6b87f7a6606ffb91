//! Synthetic zeta-distribution sampling.
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Zeta};

use crate::error::Error;

fn validate_exponent(exponent: f64) -> Result<(), Error> {
    if !exponent.is_finite() || exponent <= 1.0 {
        return Err(Error::InvalidParameter(format!(
            "zipf sampling requires exponent > 1, got {}",
            exponent
        )));
    }
    Ok(())
}

/// Draw `count` independent samples from the discrete Zipf (zeta)
/// distribution with the given exponent.
///
/// Samples are integers ≥ 1 with no upper bound. The random source is
/// injected; pass a seeded rng for reproducible sequences. Counts are
/// `usize`, so a negative sample size is unrepresentable.
///
/// Fails with [Error::InvalidParameter] unless `exponent > 1`.
pub fn sample_zipf<R: Rng>(rng: &mut R, exponent: f64, count: usize) -> Result<Vec<u64>, Error> {
    validate_exponent(exponent)?;
    let dist =
        Zeta::new(exponent).map_err(|e| Error::InvalidParameter(format!("zeta: {:?}", e)))?;
    Ok((0..count).map(|_| dist.sample(rng) as u64).collect())
}

/// Reusable seeded sampler.
///
/// Wraps a validated distribution together with its random source, so a
/// configuration object can carry one around (`seed: None` draws the seed
/// from entropy).
pub struct ZipfSampler {
    dist: Zeta<f64>,
    exponent: f64,
    rng: StdRng,
}

impl ZipfSampler {
    pub fn new(exponent: f64, seed: Option<u64>) -> Result<Self, Error> {
        validate_exponent(exponent)?;
        let dist =
            Zeta::new(exponent).map_err(|e| Error::InvalidParameter(format!("zeta: {:?}", e)))?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!("zipf sampler: a={} seed={:?}", exponent, seed);
        Ok(Self {
            dist,
            exponent,
            rng,
        })
    }

    /// Get a reference to the sampler's exponent.
    pub fn exponent(&self) -> &f64 {
        &self.exponent
    }

    /// Draw `count` samples, advancing the internal rng.
    pub fn draw(&mut self, count: usize) -> Vec<u64> {
        (0..count).map(|_| self.dist.sample(&mut self.rng) as u64).collect()
    }
}

/// Count occurrences of each value: index `i` holds the count of value `i`.
///
/// Samples are ≥ 1, so index 0 always stays 0. Empty input yields an empty
/// vector ("no observed values" rather than a lone origin bucket).
pub fn bincount(samples: &[u64]) -> Vec<u64> {
    match samples.iter().max() {
        None => Vec::new(),
        Some(&max) => {
            let mut counts = vec![0u64; max as usize + 1];
            for &sample in samples {
                counts[sample as usize] += 1;
            }
            counts
        }
    }
}

/// `[1, 2, ..., max_rank]`.
///
/// Fails with [Error::InvalidParameter] if `max_rank < 1`.
pub fn rank_array(max_rank: u64) -> Result<Vec<u64>, Error> {
    if max_rank < 1 {
        return Err(Error::InvalidParameter(format!(
            "rank array requires max_rank >= 1, got {}",
            max_rank
        )));
    }
    Ok((1..=max_rank).collect())
}
