use std::path::Path;

use tracing::debug;

use crate::{
    error::{Error, ReadError},
    loader::{FileLoader, ProcFsLoader},
    options::ScanOptions,
    record::ScanStatistics,
    scanner::LineScanner,
    sink::ResultSink,
};

/// Reads a file through a [`FileLoader`] and delivers its lines to a
/// [`ResultSink`].
///
/// # Examples
///
/// ```no_run
/// use procrows::{ProcRows, RowSet, ScanOptions};
///
/// let procrows = ProcRows::new(ScanOptions::default());
/// let mut rows = RowSet::new();
/// procrows.read_rows("/proc/loadavg", &mut rows)?;
/// for row in rows.rows() {
///     println!("{}\t{}", row.lineno, row.data);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcRows<L = ProcFsLoader> {
    loader: L,
    scanner: LineScanner,
}

impl ProcRows {
    /// Reads from `/proc` with the given scan options.
    #[must_use]
    pub fn new(options: ScanOptions) -> Self {
        Self::with_loader(ProcFsLoader::new(), options)
    }
}

impl<L: FileLoader> ProcRows<L> {
    /// Reads through `loader` instead of the default `/proc` loader.
    #[must_use]
    pub fn with_loader(loader: L, options: ScanOptions) -> Self {
        Self {
            loader,
            scanner: LineScanner::new(options),
        }
    }

    /// The loader files are read through.
    #[must_use]
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// The scanner applied to every loaded file.
    #[must_use]
    pub fn scanner(&self) -> &LineScanner {
        &self.scanner
    }

    /// Loads `path` and runs only the measure pass.
    ///
    /// # Errors
    ///
    /// Returns the loader's [`ReadError`].
    pub fn statistics(&self, path: impl AsRef<Path>) -> Result<ScanStatistics, ReadError> {
        let buffer = self.loader.load(path.as_ref())?;
        Ok(self.scanner.measure(&buffer))
    }

    /// Loads `path`, scans it, and delivers every row to `sink`.
    ///
    /// The sink is only called once the whole file has been scanned
    /// successfully; on a scan failure it receives nothing.
    ///
    /// # Errors
    ///
    /// - [`Error::Read`] if the loader refuses or fails to read the file.
    /// - [`Error::Scan`] if a line is too long.
    /// - [`Error::Sink`] if the sink fails.
    pub fn read_rows<S: ResultSink + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        sink: &mut S,
    ) -> Result<ScanStatistics, Error<S::Error>> {
        let path = path.as_ref();
        debug!(path = %path.display(), "read_rows");

        let buffer = self.loader.load(path)?;
        let scan = self.scanner.scan(&buffer).map_err(|source| Error::Scan {
            path: path.to_path_buf(),
            source,
        })?;
        scan.deliver(sink).map_err(Error::Sink)
    }
}
