//! Two-pass line scanner.
//!
//! Both passes walk the same borrowed buffer with their own [`Cursor`]:
//!
//! - `measure` only counts. It never fails and never allocates.
//! - `emit` copies each terminated line into a record. It checks the line
//!   limit before every byte it appends, so no byte past the limit is ever
//!   retained, and it stops at the first over-long line.
//!
//! A trailing fragment with no terminator is counted in
//! [`ScanStatistics::total_chars`] and otherwise dropped: it produces no
//! record and does not contribute to `max_line_length`.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use tracing::{debug, trace, warn};

use crate::{
    cursor::Cursor,
    error::ScanError,
    options::ScanOptions,
    record::{LineRecord, ScanStatistics},
    sink::ResultSink,
};


/// Scans byte buffers into line records.
///
/// A `LineScanner` holds only configuration. All per-scan state lives in the
/// cursors and iterators it hands out, so one scanner can serve any number of
/// buffers, one after another or concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScanner {
    options: ScanOptions,
}

/// The complete result of both passes over one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    /// Output of the measure pass.
    pub statistics: ScanStatistics,
    /// One record per terminated line, in order.
    pub records: Vec<LineRecord>,
}

impl LineScanner {
    /// A scanner with the given options.
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// The options this scanner was built with.
    #[must_use]
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// First pass: characterizes `buffer` without producing records.
    #[must_use]
    pub fn measure(&self, buffer: &[u8]) -> ScanStatistics {
        let terminator = self.options.terminator;
        let mut cursor = Cursor::new(buffer);
        let mut first_terminator_offset = None;

        while cursor.has_more() {
            let byte = cursor.current_byte();
            if byte == terminator {
                if first_terminator_offset.is_none() {
                    first_terminator_offset = Some(cursor.position());
                }
                cursor.on_line_terminator(byte);
            } else {
                cursor.advance();
            }
        }

        let statistics = ScanStatistics {
            total_chars: cursor.position(),
            line_count: cursor.line_count(),
            max_line_length: cursor.max_line_length(),
            first_terminator_offset,
        };
        debug!(
            total_chars = statistics.total_chars,
            line_count = statistics.line_count,
            max_line_length = statistics.max_line_length,
            first_terminator_offset = ?statistics.first_terminator_offset,
            "checked {} characters in {} lines (longest={})",
            statistics.total_chars,
            statistics.line_count,
            statistics.max_line_length,
        );
        statistics
    }

    /// Second pass, lazily: yields one record per terminator.
    ///
    /// `statistics` should come from [`measure`](Self::measure) over the same
    /// buffer; it is only used to size the per-line working area.
    #[must_use]
    pub fn lines<'src>(&self, buffer: &'src [u8], statistics: &ScanStatistics) -> Lines<'src> {
        Lines::new(buffer, statistics, self.options)
    }

    /// Second pass, collected: every record, or the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::LineTooLong`] for the first line that reaches
    /// [`ScanOptions::max_line_length`]. Records for earlier lines are
    /// discarded.
    pub fn emit(
        &self,
        buffer: &[u8],
        statistics: &ScanStatistics,
    ) -> Result<Vec<LineRecord>, ScanError> {
        let mut records = Vec::with_capacity(statistics.line_count);
        for record in self.lines(buffer, statistics) {
            records.push(record?);
        }
        Ok(records)
    }

    /// Runs both passes over `buffer`.
    ///
    /// # Errors
    ///
    /// See [`emit`](Self::emit).
    pub fn scan(&self, buffer: &[u8]) -> Result<Scan, ScanError> {
        let statistics = self.measure(buffer);
        let records = self.emit(buffer, &statistics)?;
        Ok(Scan {
            statistics,
            records,
        })
    }
}

impl Scan {
    /// Hands statistics and then every record to `sink`, in line order.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first error the sink reports.
    pub fn deliver<S: ResultSink + ?Sized>(self, sink: &mut S) -> Result<ScanStatistics, S::Error> {
        sink.begin(&self.statistics)?;
        for record in self.records {
            sink.row(record)?;
        }
        sink.finish()?;
        Ok(self.statistics)
    }
}

/// Iterator over the records of one buffer. Created by
/// [`LineScanner::lines`].
///
/// Yields `Ok` records in increasing line order. After an `Err` or once the
/// buffer is exhausted it only yields `None`.
#[derive(Debug, Clone)]
pub struct Lines<'src> {
    cursor: Cursor<'src>,
    terminator: u8,
    limit: usize,
    line_number: usize,
    line: Vec<u8>,
    done: bool,
}

impl<'src> Lines<'src> {
    fn new(buffer: &'src [u8], statistics: &ScanStatistics, options: ScanOptions) -> Self {
        let limit = options.max_line_length;
        Self {
            cursor: Cursor::new(buffer),
            terminator: options.terminator,
            limit,
            line_number: 1,
            line: Vec::with_capacity(statistics.max_line_length.min(limit)),
            done: false,
        }
    }

    /// Number the next emitted record will carry.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn line_too_long(&mut self) -> ScanError {
        self.done = true;
        self.line.clear();
        warn!(
            line_number = self.line_number,
            limit = self.limit,
            "line {} larger than {}",
            self.line_number,
            self.limit
        );
        ScanError::LineTooLong {
            line_number: self.line_number,
            limit: self.limit,
        }
    }
}

impl Iterator for Lines<'_> {
    type Item = Result<LineRecord, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while self.cursor.has_more() {
            // The terminator needs a slot too, so a line must end before
            // `column` reaches the limit.
            if self.cursor.column() >= self.limit {
                return Some(Err(self.line_too_long()));
            }

            let byte = self.cursor.current_byte();
            if byte == self.terminator {
                self.cursor.on_line_terminator(byte);
                let record = LineRecord::new(self.line_number, self.line.as_slice());
                self.line.clear();
                self.line_number += 1;
                trace!(line_number = record.line_number, len = record.content.len());
                return Some(Ok(record));
            }

            self.line.push(byte);
            self.cursor.advance();
        }

        if !self.line.is_empty() {
            debug!(
                bytes = self.line.len(),
                "discarding unterminated trailing fragment"
            );
            self.line.clear();
        }
        self.done = true;
        None
    }
}

impl FusedIterator for Lines<'_> {}
