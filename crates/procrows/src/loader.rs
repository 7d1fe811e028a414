use std::{
    fs,
    path::{Component, Path, PathBuf},
    vec::Vec,
};

use tracing::debug;

use crate::error::ReadError;

/// Source of the bytes to scan.
pub trait FileLoader {
    /// Reads the whole of `path` into memory.
    ///
    /// # Errors
    ///
    /// Returns a [`ReadError`] when the path is refused by policy, does not
    /// exist, cannot be read, or is not a regular file.
    fn load(&self, path: &Path) -> Result<Vec<u8>, ReadError>;
}

impl<L: FileLoader + ?Sized> FileLoader for &L {
    fn load(&self, path: &Path) -> Result<Vec<u8>, ReadError> {
        (**self).load(path)
    }
}

/// Loads regular files that live under a fixed root directory.
///
/// The root check runs twice: once on the path as given, and once on the
/// path with every symlink resolved, so a link under the root cannot reach a
/// file outside it. Virtual files report a size of zero from `stat`, so the size is only
/// logged and the file is always read to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcFsLoader {
    root: PathBuf,
}

impl Default for ProcFsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcFsLoader {
    /// Root used by [`ProcFsLoader::new`].
    pub const DEFAULT_ROOT: &'static str = "/proc";

    /// A loader restricted to `/proc`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(Self::DEFAULT_ROOT)
    }

    /// A loader restricted to `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory every loaded file must lie under.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Applies the path policy without touching the file system.
    ///
    /// The comparison is component-wise, so `/procfs/x` is not under `/proc`,
    /// and any `..` component is refused outright.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::PathRejected`] if `path` is outside the root.
    pub fn check_path(&self, path: &Path) -> Result<(), ReadError> {
        let escapes = path.components().any(|c| c == Component::ParentDir);
        if escapes || !is_strictly_under(path, &self.root) {
            return Err(self.rejected(path));
        }
        Ok(())
    }

    /// Resolves symlinks in `path` and applies the root check again to the
    /// result, returning the path that is safe to read.
    ///
    /// `/proc/self/status` resolves to `/proc/<pid>/status` and passes, while
    /// `/proc/self/root/etc/hostname` resolves outside the root and is refused.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::PathRejected`] if the resolved path is outside the
    /// resolved root, or the I/O error that prevented resolution.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf, ReadError> {
        let root =
            fs::canonicalize(&self.root).map_err(|e| ReadError::from_io(self.root.clone(), e))?;
        let resolved =
            fs::canonicalize(path).map_err(|e| ReadError::from_io(path.to_path_buf(), e))?;
        if !is_strictly_under(&resolved, &root) {
            debug!(path = %path.display(), resolved = %resolved.display(), "escapes root");
            return Err(self.rejected(path));
        }
        Ok(resolved)
    }

    fn rejected(&self, path: &Path) -> ReadError {
        ReadError::PathRejected {
            path: path.to_path_buf(),
            root: self.root.clone(),
        }
    }
}

fn is_strictly_under(path: &Path, root: &Path) -> bool {
    path != root && path.starts_with(root)
}

impl FileLoader for ProcFsLoader {
    fn load(&self, path: &Path) -> Result<Vec<u8>, ReadError> {
        self.check_path(path)?;
        let resolved = self.resolve(path)?;

        let metadata =
            fs::metadata(&resolved).map_err(|e| ReadError::from_io(path.to_path_buf(), e))?;
        if !metadata.is_file() {
            return Err(ReadError::NotRegularFile {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), size = metadata.len(), "stat");

        let bytes = fs::read(&resolved).map_err(|e| ReadError::from_io(path.to_path_buf(), e))?;
        debug!(path = %path.display(), read = bytes.len(), "loaded");
        Ok(bytes)
    }
}
