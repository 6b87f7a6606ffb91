//! Plain-text rendering of analysis results.
use crate::counting::RankedSeries;
use crate::pipelines::ComparisonReport;
use crate::zipf::ZipfFit;

/// Aligned table of the `n` most common tokens, one `rank token count`
/// line each. Column width follows the longest token shown.
pub fn top_words(series: &RankedSeries, n: usize) -> String {
    let top = series.top(n);
    let width = top
        .iter()
        .map(|(token, _)| token.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    let mut out = String::new();
    for (i, (token, count)) in top.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<width$}  {:>8}\n",
            i + 1,
            token,
            count,
            width = width
        ));
    }
    out
}

/// One-line fit parameter summary.
pub fn fit_summary(fit: &ZipfFit) -> String {
    format!(
        "zipf fit: a={:.4} loc={:.1} scale={:.6}",
        fit.exponent(),
        fit.location(),
        fit.scale()
    )
}

/// First `n` ranks of an observed-vs-expected comparison.
pub fn comparison_preview(report: &ComparisonReport, n: usize) -> String {
    let mut out = String::from("rank  observed  expected\n");
    let shown = n.min(report.ranks.len());
    for i in 0..shown {
        out.push_str(&format!(
            "{:>4}  {:>8}  {:>10.2}\n",
            report.ranks[i], report.observed[i], report.expected[i]
        ));
    }
    if shown < report.ranks.len() {
        out.push_str(&format!("... {} more ranks\n", report.ranks.len() - shown));
    }
    out
}
