//! Corpus frequency analysis pipeline.
use log::{info, warn};

use crate::counting::{FrequencyTable, RankedSeries};
use crate::error::Error;
use crate::filtering::{Filter, Length, Numeric, Stopwords};
use crate::sources::TokenSource;
use crate::zipf::{fit_zipf, ZipfFit};

/// Corpus analysis parameters.
///
/// Tokens come from the injected source; stopwords, single characters and
/// digit runs are dropped before counting.
pub struct CorpusAnalysis<S: TokenSource> {
    source: S,
    top_n: usize,
    additional_stopwords: Vec<String>,
}

/// Everything the display collaborators need: the full ranked series,
/// corpus totals and the fit outcome.
#[derive(Debug)]
pub struct CorpusReport {
    pub series: RankedSeries,
    pub total_tokens: u64,
    pub distinct_tokens: usize,
    pub top_n: usize,
    /// `None` when the corpus is too small or degenerate to fit; the
    /// failure is logged, not fatal, since the ranked series stays useful.
    pub fit: Option<ZipfFit>,
}

impl<S: TokenSource> CorpusAnalysis<S> {
    pub fn new(source: S, top_n: usize, additional_stopwords: Vec<String>) -> Self {
        Self {
            source,
            top_n,
            additional_stopwords,
        }
    }

    pub fn run(&self) -> Result<CorpusReport, Error> {
        let mut tokens = self.source.tokens()?;
        info!("corpus: {} raw tokens", tokens.len());

        let stopwords = Stopwords::with_additional(&self.additional_stopwords);
        let length = Length::default();
        let numeric = Numeric::default();
        tokens.retain(|token| {
            stopwords.detect(token) && length.detect(token) && numeric.detect(token)
        });
        info!("corpus: {} tokens after filtering", tokens.len());

        let table = FrequencyTable::from_tokens(&tokens);
        let series = RankedSeries::from_table(&table);

        let counts: Vec<f64> = series.counts().iter().map(|&c| c as f64).collect();
        let fit = match fit_zipf(&counts) {
            Ok(fit) => Some(fit),
            Err(e) => {
                warn!("power-law fit skipped: {:?}", e);
                None
            }
        };

        Ok(CorpusReport {
            total_tokens: table.total(),
            distinct_tokens: table.len(),
            top_n: self.top_n,
            series,
            fit,
        })
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::CorpusAnalysis;

    const SPEECH: &str = "Yesterday, December 7, 1941, a date which will live in infamy, \
        the United States of America was suddenly and deliberately attacked by naval \
        and air forces of the Empire of Japan. The United States was at peace with \
        that nation.";

    #[test]
    fn filters_then_counts() {
        let analysis = CorpusAnalysis::new(SPEECH, 5, vec![]);
        let report = analysis.run().unwrap();

        // "united" and "states" survive with count 2; stopwords are gone
        let top: Vec<&str> = report.series.top(2).iter().map(|(t, _)| t.as_str()).collect();
        assert!(top.contains(&"united"));
        assert!(top.contains(&"states"));
        assert!(report.series.iter().all(|(_, t, _)| t != "the" && t != "was"));
        // the date tokens are digit runs, dropped
        assert!(report.series.iter().all(|(_, t, _)| t != "1941"));
        assert!(report.distinct_tokens > 0);
        assert!(report.total_tokens >= report.distinct_tokens as u64);
    }

    #[test]
    fn additional_stopwords_apply() {
        let analysis = CorpusAnalysis::new(SPEECH, 5, vec!["united".to_string()]);
        let report = analysis.run().unwrap();
        assert!(report.series.iter().all(|(_, t, _)| t != "united"));
    }

    #[test]
    fn tiny_corpus_skips_fit_without_failing() {
        let analysis = CorpusAnalysis::new("alpha beta gamma", 3, vec![]);
        let report = analysis.run().unwrap();
        // every count is 1: degenerate for the fit, fine for ranking
        assert!(report.fit.is_none());
        assert_eq!(report.distinct_tokens, 3);
    }

    #[test]
    fn empty_corpus() {
        let analysis = CorpusAnalysis::new("", 10, vec![]);
        let report = analysis.run().unwrap();
        assert!(report.series.is_empty());
        assert_eq!(report.total_tokens, 0);
        assert!(report.fit.is_none());
    }
}
