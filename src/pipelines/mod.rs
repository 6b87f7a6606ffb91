/*! Analysis pipelines.

Each pipeline is a configuration object with a `run` method, replacing
one-shot script state with explicit parameters.

[CorpusAnalysis] takes tokens through filtering, counting and ranking to
an optional power-law fit. [SampleComparison] draws a synthetic zeta
sample and puts its bincounts next to the expected counts per rank.
!*/
mod corpus;
mod sample;

pub use corpus::{CorpusAnalysis, CorpusReport};
pub use sample::{ComparisonReport, SampleComparison};
