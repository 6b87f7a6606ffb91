use zipfian::pipelines::SampleComparison;
use zipfian::writing;
use zipfian::zipf::{expected_counts, fit_zipf};

#[test]
fn sample_against_theory_end_to_end() {
    let report = SampleComparison::new(4.0, 20_000, Some(20)).run().unwrap();

    // one row per rank, counts conserved
    assert_eq!(report.ranks.len(), report.observed.len());
    assert_eq!(report.ranks.len(), report.expected.len());
    assert_eq!(report.observed.iter().sum::<u64>(), 20_000);

    // theory is non-increasing over ranks
    for pair in report.expected.windows(2) {
        assert!(pair[0] >= pair[1]);
    }

    // CSV for the plotting collaborator
    let mut buf = Vec::new();
    writing::write_comparison(&mut buf, &report).unwrap();
    let csv = String::from_utf8(buf).unwrap();
    assert!(csv.starts_with("rank,observed,expected\n"));
    assert_eq!(csv.lines().count(), report.ranks.len() + 1);
}

#[test]
fn fit_recovers_the_sampling_exponent() {
    let report = SampleComparison::new(3.0, 20_000, Some(21)).run().unwrap();

    // rebuild the raw sample values from the bincounts and fit them back
    let mut values = Vec::new();
    for (i, &count) in report.observed.iter().enumerate() {
        let value = (i + 1) as f64;
        values.extend(std::iter::repeat(value).take(count as usize));
    }

    let fit = fit_zipf(&values).unwrap();
    assert!((fit.exponent() - 3.0).abs() < 0.5);
    assert_eq!(*fit.location(), 0.0);
}

#[test]
fn expected_counts_match_report() {
    let report = SampleComparison::new(2.5, 5_000, Some(22)).run().unwrap();
    let recomputed = expected_counts(&report.ranks, 2.5, 5_000).unwrap();
    assert_eq!(report.expected, recomputed);
}
