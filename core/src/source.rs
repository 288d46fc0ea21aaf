//! User-selected input files.

use std::io;
use std::path::{Path, PathBuf};

/// A file the user picked. Reading it may suspend the caller.
#[async_trait::async_trait(?Send)]
pub trait FileSource {
    /// Display name, including extension.
    fn name(&self) -> &str;

    /// Size hint, if the host knows it before reading.
    fn len_hint(&self) -> Option<u64> {
        None
    }

    /// Read the full contents.
    async fn read(&self) -> io::Result<Vec<u8>>;
}

/// A file on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait(?Send)]
impl FileSource for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn len_hint(&self) -> Option<u64> {
        std::fs::metadata(&self.path).ok().map(|m| m.len())
    }

    async fn read(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}
