use std::io::{self, Write};

use procrows::{LineRecord, ResultSink, RowSet, ScanStatistics};

/// Writes rows as `lineno<TAB>data` lines.
///
/// Backslash, tab, newline and carriage return inside the content are written
/// as `\\`, `\t`, `\n` and `\r`, so every output line has exactly two columns.
/// Other bytes are written as-is, without UTF-8 validation.
pub struct TsvSink<W> {
    out: W,
    header: bool,
}

impl<W: Write> TsvSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, header: true }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl<W: Write> ResultSink for TsvSink<W> {
    type Error = io::Error;

    fn begin(&mut self, _statistics: &ScanStatistics) -> Result<(), Self::Error> {
        if self.header {
            let [lineno, data] = RowSet::COLUMNS;
            writeln!(self.out, "{lineno}\t{data}")?;
        }
        Ok(())
    }

    fn row(&mut self, record: LineRecord) -> Result<(), Self::Error> {
        write!(self.out, "{}\t", record.line_number)?;
        write_escaped(&mut self.out, record.as_bytes())?;
        self.out.write_all(b"\n")
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.out.flush()
    }
}

fn write_escaped<W: Write>(out: &mut W, content: &[u8]) -> io::Result<()> {
    let mut rest = content;
    while let Some(at) = rest.iter().position(|b| matches!(b, b'\\' | b'\t' | b'\n' | b'\r')) {
        out.write_all(&rest[..at])?;
        let escape: &[u8] = match rest[at] {
            b'\\' => b"\\\\",
            b'\t' => b"\\t",
            b'\n' => b"\\n",
            _ => b"\\r",
        };
        out.write_all(escape)?;
        rest = &rest[at + 1..];
    }
    out.write_all(rest)
}
