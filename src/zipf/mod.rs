/*! Zipf-law numerics

The analytical core: Riemann zeta evaluation, synthetic zeta-distribution
sampling, theoretical expected counts per rank, and a maximum-likelihood
power-law fit with the location parameter pinned to 0.

Every operation is a pure function from input to output; the only
non-determinism is the injected random source of the samplers.
!*/
mod expected;
mod fit;
mod sample;
mod zeta;

pub use expected::expected_counts;
pub use fit::{fit_zipf, ZipfFit};
pub use sample::{bincount, rank_array, sample_zipf, ZipfSampler};
pub use zeta::zeta;
