//! CSV output for the plotting collaborator.
use std::io;

use serde::Serialize;

use crate::counting::RankedSeries;
use crate::error::Error;
use crate::pipelines::ComparisonReport;

#[derive(Debug, Serialize)]
struct RankRow<'a> {
    rank: usize,
    token: &'a str,
    count: u64,
}

#[derive(Debug, Serialize)]
struct ComparisonRow {
    rank: u64,
    observed: u64,
    expected: f64,
}

/// Write a ranked series as `rank,token,count` rows.
pub fn write_ranked_series<W: io::Write>(writer: W, series: &RankedSeries) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (rank, token, count) in series.iter() {
        wtr.serialize(RankRow { rank, token, count })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write an observed-vs-expected comparison as `rank,observed,expected`
/// rows.
pub fn write_comparison<W: io::Write>(writer: W, report: &ComparisonReport) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for i in 0..report.ranks.len() {
        wtr.serialize(ComparisonRow {
            rank: report.ranks[i],
            observed: report.observed[i],
            expected: report.expected[i],
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_comparison, write_ranked_series};
    use crate::counting::{FrequencyTable, RankedSeries};
    use crate::pipelines::SampleComparison;

    #[test]
    fn ranked_series_rows() {
        let table = FrequencyTable::from_tokens(["b", "a", "b", "a", "c"]);
        let series = RankedSeries::from_table(&table);

        let mut buf = Vec::new();
        write_ranked_series(&mut buf, &series).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "rank,token,count");
        assert_eq!(lines[1], "1,b,2");
        assert_eq!(lines[2], "2,a,2");
        assert_eq!(lines[3], "3,c,1");
    }

    #[test]
    fn comparison_rows_align() {
        let report = SampleComparison::new(3.0, 1_000, Some(9)).run().unwrap();

        let mut buf = Vec::new();
        write_comparison(&mut buf, &report).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "rank,observed,expected");
        assert_eq!(lines.len(), report.ranks.len() + 1);
        assert!(lines[1].starts_with("1,"));
    }

    #[test]
    fn empty_series_writes_nothing() {
        let series = RankedSeries::from_table(&FrequencyTable::new());
        let mut buf = Vec::new();
        write_ranked_series(&mut buf, &series).unwrap();
        // no rows serialized, so not even a header
        assert!(buf.is_empty());
    }
}
