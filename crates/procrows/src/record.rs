use alloc::borrow::Cow;

use bstr::{BString, ByteSlice};

/// What the measure pass learned about a buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScanStatistics {
    /// Every byte in the buffer, terminators and trailing fragment included.
    pub total_chars: usize,
    /// Number of terminators, which is also the number of records emit
    /// produces.
    pub line_count: usize,
    /// Length of the longest terminated line, terminator excluded.
    pub max_line_length: usize,
    /// Absolute offset of the first terminator, if there is one.
    ///
    /// Kept for callers that want to skip a header line.
    pub first_terminator_offset: Option<usize>,
}

/// One line of the buffer, as produced by the emit pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineRecord {
    /// 1-based, strictly increasing across a scan.
    pub line_number: usize,
    /// The line's bytes without the terminator.
    pub content: BString,
}

impl LineRecord {
    /// Creates a record for `line_number` holding `content`.
    pub fn new(line_number: usize, content: impl Into<BString>) -> Self {
        Self {
            line_number,
            content: content.into(),
        }
    }

    /// Raw line bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_slice()
    }

    /// Line content as text, replacing invalid UTF-8 with U+FFFD.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        self.content.to_str_lossy()
    }
}
