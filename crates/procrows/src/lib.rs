//! Line scanning for kernel virtual files.
//!
//! A file such as `/proc/meminfo` is read whole into memory and exposed as a
//! sequence of `(line number, content)` rows. The work happens in two passes
//! over the same borrowed buffer:
//!
//! - [`LineScanner::measure`] walks the buffer once to produce
//!   [`ScanStatistics`] without allocating any output.
//! - [`LineScanner::emit`] walks it again with a fresh [`Cursor`] and yields a
//!   [`LineRecord`] per line terminator, refusing any line that does not fit
//!   within [`ScanOptions::max_line_length`].
//!
//! With the `std` feature (on by default), [`ProcRows`] ties the scanner to a
//! path-checking [`FileLoader`] and hands the result to a [`ResultSink`].
//!
//! ```rust
//! use procrows::{LineScanner, ScanOptions};
//!
//! let scanner = LineScanner::new(ScanOptions::default());
//! let scan = scanner.scan(b"a\nbb\nccc\n").unwrap();
//! assert_eq!(scan.statistics.line_count, 3);
//! assert_eq!(scan.statistics.max_line_length, 3);
//! assert_eq!(scan.records[1].content, "bb");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod cursor;
mod error;
mod options;
mod record;
mod scanner;
mod sink;

#[cfg(feature = "std")]
mod loader;
#[cfg(feature = "std")]
mod procrows;


pub use cursor::Cursor;
pub use error::ScanError;
#[cfg(feature = "std")]
pub use error::{Error, ReadError};
#[cfg(feature = "std")]
pub use loader::{FileLoader, ProcFsLoader};
pub use options::{LINE_TERMINATOR, MAX_LINE_LENGTH, ScanOptions};
#[cfg(feature = "std")]
pub use procrows::ProcRows;
pub use record::{LineRecord, ScanStatistics};
pub use scanner::{LineScanner, Lines, Scan};
pub use sink::{ResultSink, Row, RowSet};
