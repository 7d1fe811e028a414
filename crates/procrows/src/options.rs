/// Default limit on the bytes a single line may occupy, terminator included.
///
/// A line is accepted only when its content is strictly shorter than this
/// value, so that content plus terminator fit a fixed-capacity slot.
pub const MAX_LINE_LENGTH: usize = 32_768;

/// The byte that ends a line unless configured otherwise.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Configuration options for [`LineScanner`](crate::LineScanner).
///
/// # Examples
///
/// ```rust
/// use procrows::{LineScanner, ScanOptions};
///
/// let scanner = LineScanner::new(ScanOptions {
///     terminator: b'\0',
///     ..Default::default()
/// });
/// let scan = scanner.scan(b"init\0--verbose\0").unwrap();
/// assert_eq!(scan.records.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// The single byte that delimits one line from the next.
    ///
    /// No normalization happens beyond this byte: a `\r` before a `\n` stays
    /// part of the line content.
    ///
    /// # Default
    ///
    /// `b'\n'`
    pub terminator: u8,

    /// Upper bound on the bytes of a line, terminator included.
    ///
    /// The emit pass fails with
    /// [`ScanError::LineTooLong`](crate::ScanError::LineTooLong) as soon as a
    /// line reaches this many bytes without having ended. The bound is fixed
    /// and independent of the measured longest line.
    ///
    /// # Default
    ///
    /// [`MAX_LINE_LENGTH`] (32768)
    pub max_line_length: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            terminator: LINE_TERMINATOR,
            max_line_length: MAX_LINE_LENGTH,
        }
    }
}
