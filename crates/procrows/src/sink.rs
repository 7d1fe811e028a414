use alloc::{string::String, vec::Vec};
use core::convert::Infallible;

use crate::record::{LineRecord, ScanStatistics};

/// Consumer of a finished scan.
///
/// A sink turns records into whatever the caller's result protocol expects.
/// It is only called after the emit pass succeeded for the whole buffer, so a
/// sink never sees a partial scan.
pub trait ResultSink {
    /// Failure reported by the sink itself.
    type Error;

    /// Called once, before any row.
    fn begin(&mut self, statistics: &ScanStatistics) -> Result<(), Self::Error> {
        let _ = statistics;
        Ok(())
    }

    /// Called once per record, in increasing line order.
    fn row(&mut self, record: LineRecord) -> Result<(), Self::Error>;

    /// Called once, after the last row.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ResultSink for Vec<LineRecord> {
    type Error = Infallible;

    fn begin(&mut self, statistics: &ScanStatistics) -> Result<(), Self::Error> {
        self.reserve(statistics.line_count);
        Ok(())
    }

    fn row(&mut self, record: LineRecord) -> Result<(), Self::Error> {
        self.push(record);
        Ok(())
    }
}

/// A materialized `(lineno, data)` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based line number.
    pub lineno: usize,
    /// Line content as text, terminator excluded.
    pub data: String,
}

/// Sink that materializes every record as a text [`Row`].
///
/// Content that is not valid UTF-8 is decoded lossily.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSet {
    statistics: ScanStatistics,
    rows: Vec<Row>,
}

impl RowSet {
    /// An empty row set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Column names, in row order.
    pub const COLUMNS: [&'static str; 2] = ["lineno", "data"];

    /// Rows of the last scan delivered to this set.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Statistics of the last scan delivered to this set.
    #[must_use]
    pub fn statistics(&self) -> &ScanStatistics {
        &self.statistics
    }

    /// Consumes the set, keeping only its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl ResultSink for RowSet {
    type Error = Infallible;

    fn begin(&mut self, statistics: &ScanStatistics) -> Result<(), Self::Error> {
        self.statistics = *statistics;
        self.rows.clear();
        self.rows.reserve(statistics.line_count);
        Ok(())
    }

    fn row(&mut self, record: LineRecord) -> Result<(), Self::Error> {
        let data = record.to_text().into_owned();
        self.rows.push(Row {
            lineno: record.line_number,
            data,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;
    use crate::{LineScanner, ScanOptions};

    #[test]
    fn row_set_keeps_line_numbers_and_text() {
        let scan = LineScanner::new(ScanOptions::default())
            .scan(b"MemTotal: 1\nMemFree: 2\n")
            .unwrap();
        let mut rows = RowSet::new();
        let statistics = scan.deliver(&mut rows).unwrap();

        assert_eq!(rows.statistics(), &statistics);
        assert_eq!(
            rows.into_rows(),
            vec![
                Row {
                    lineno: 1,
                    data: "MemTotal: 1".to_string()
                },
                Row {
                    lineno: 2,
                    data: "MemFree: 2".to_string()
                },
            ]
        );
    }

    #[test]
    fn row_set_decodes_invalid_utf8_lossily() {
        let scan = LineScanner::default().scan(b"a\xffb\n").unwrap();
        let mut rows = RowSet::new();
        scan.deliver(&mut rows).unwrap();
        assert_eq!(rows.rows()[0].data, "a\u{FFFD}b");
    }

    #[test]
    fn row_set_is_cleared_between_scans() {
        let scanner = LineScanner::default();
        let mut rows = RowSet::new();
        scanner.scan(b"1\n2\n3\n").unwrap().deliver(&mut rows).unwrap();
        scanner.scan(b"only\n").unwrap().deliver(&mut rows).unwrap();
        assert_eq!(rows.rows().len(), 1);
        assert_eq!(rows.statistics().line_count, 1);
    }

    #[test]
    fn vec_sink_collects_records() {
        let mut records: Vec<LineRecord> = Vec::new();
        LineScanner::default()
            .scan(b"x\ny\n")
            .unwrap()
            .deliver(&mut records)
            .unwrap();
        assert_eq!(records, vec![LineRecord::new(1, "x"), LineRecord::new(2, "y")]);
    }
}
