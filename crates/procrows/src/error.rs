use thiserror::Error;

#[cfg(feature = "std")]
use std::{io, path::PathBuf};

/// Failures raised while emitting line records.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// A line reached the configured limit before its terminator.
    ///
    /// The whole emit pass is aborted; records produced for earlier lines
    /// must not be trusted.
    #[error("line {line_number} larger than {limit} bytes")]
    LineTooLong {
        /// 1-based number of the offending line.
        line_number: usize,
        /// The limit that was exceeded, terminator included.
        limit: usize,
    },
}

/// Failures raised by a [`FileLoader`](crate::FileLoader) before any scanning
/// starts.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum ReadError {
    /// The path is outside the loader's root, either as written or once its
    /// symlinks are resolved.
    #[error("file name {} does not belong to {}", .path.display(), .root.display())]
    PathRejected {
        /// The path as requested.
        path: PathBuf,
        /// The root it had to lie under.
        root: PathBuf,
    },
    /// Nothing exists at the path.
    #[error("{} does not exist", .path.display())]
    NotFound {
        /// The path as requested.
        path: PathBuf,
    },
    /// The process may not stat or read the path.
    #[error("permission denied reading {}", .path.display())]
    PermissionDenied {
        /// The path as requested.
        path: PathBuf,
    },
    /// The path names a directory, device or other non-regular file.
    #[error("{} is not a regular file", .path.display())]
    NotRegularFile {
        /// The path as requested.
        path: PathBuf,
    },
    /// Any other I/O failure.
    #[error("failed to read {}", .path.display())]
    Io {
        /// The path as requested.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

#[cfg(feature = "std")]
impl ReadError {
    /// The path the failure is about.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            ReadError::PathRejected { path, .. }
            | ReadError::NotFound { path }
            | ReadError::PermissionDenied { path }
            | ReadError::NotRegularFile { path }
            | ReadError::Io { path, .. } => path,
        }
    }

    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound { path },
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied { path },
            _ => ReadError::Io { path, source },
        }
    }
}

/// Failure of a whole [`ProcRows::read_rows`](crate::ProcRows::read_rows)
/// invocation, generic over the sink's own error type.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum Error<E> {
    /// The file could not be loaded.
    #[error(transparent)]
    Read(#[from] ReadError),
    /// The file was loaded but one of its lines is too long.
    #[error("{}: {source}", .path.display())]
    Scan {
        /// The file being scanned.
        path: PathBuf,
        /// What the emit pass hit.
        #[source]
        source: ScanError,
    },
    /// The sink rejected the scan.
    #[error("result sink failed")]
    Sink(#[source] E),
}
