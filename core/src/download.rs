//! Save RAM download artifact.

use std::path::{Path, PathBuf};

/// Content type the page hands to the browser for save downloads.
pub const SAVE_CONTENT_TYPE: &str = "application/octet-binary";

/// Bytes offered to the user as a downloadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    /// Write the artifact into `dir` under its file name.
    ///
    /// Hosts without a browser download prompt (the CLI) use this.
    pub async fn write_to_dir(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let name = Path::new(&self.file_name)
            .file_name()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("download name '{}' is not a file name", self.file_name),
                )
            })?;
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(name);
        tokio::fs::write(&path, &self.bytes).await?;
        Ok(path)
    }
}
