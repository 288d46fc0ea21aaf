use std::path::{Path, PathBuf};

use tokio::fs;

use gbweb_shared::STAGING_SUFFIX;

use super::{DurableStore, StoreError};
use crate::vfs::Entries;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Durable store backed by one file per entry in a directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn write_entry(&self, name: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.root.join(name);
        let tmp_path = self.root.join(format!("{name}{STAGING_SUFFIX}"));

        fs::write(&tmp_path, bytes).await.map_err(io_error(&tmp_path))?;
        fs::OpenOptions::new()
            .write(true)
            .open(&tmp_path)
            .await
            .map_err(io_error(&tmp_path))?
            .sync_all()
            .await
            .map_err(io_error(&tmp_path))?;

        #[cfg(windows)]
        {
            if fs::try_exists(&path).await.unwrap_or(false) {
                // Windows rename fails if destination exists.
                fs::remove_file(&path).await.map_err(io_error(&path))?;
            }
        }

        fs::rename(&tmp_path, &path).await.map_err(io_error(&path))
    }
}

#[async_trait::async_trait(?Send)]
impl DurableStore for DirectoryStore {
    async fn pull(&mut self) -> Result<Entries, StoreError> {
        let mut entries = Entries::new();

        let mut dir = match fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(entries),
            Err(e) => return Err(io_error(&self.root)(e)),
        };

        while let Some(entry) = dir.next_entry().await.map_err(io_error(&self.root))? {
            let path = entry.path();
            let file_type = entry.file_type().await.map_err(io_error(&path))?;
            if !file_type.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                tracing::warn!("Skipping non UTF-8 file in {}", self.root.display());
                continue;
            };
            if name.ends_with(STAGING_SUFFIX) {
                tracing::debug!("Ignoring interrupted write {}", path.display());
                continue;
            }

            let bytes = fs::read(&path).await.map_err(io_error(&path))?;
            entries.insert(name, bytes);
        }

        tracing::debug!("Pulled {} entries from {}", entries.len(), self.root.display());
        Ok(entries)
    }

    async fn push(&mut self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(name) = entries.keys().find(|name| name.ends_with(STAGING_SUFFIX)) {
            return Err(StoreError::ReservedName(name.clone()));
        }

        fs::create_dir_all(&self.root)
            .await
            .map_err(io_error(&self.root))?;

        for (name, bytes) in entries {
            self.write_entry(name, bytes).await?;
        }

        // Mirror removals so cleared entries stay cleared after a reload. Every
        // write above has been renamed, so any staging file left is from an
        // interrupted push.
        let mut dir = fs::read_dir(&self.root).await.map_err(io_error(&self.root))?;
        while let Some(entry) = dir.next_entry().await.map_err(io_error(&self.root))? {
            let path = entry.path();
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            let stale = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(STAGING_SUFFIX) || !entries.contains_key(name));
            if is_file && stale {
                fs::remove_file(&path).await.map_err(io_error(&path))?;
            }
        }

        tracing::debug!("Pushed {} entries to {}", entries.len(), self.root.display());
        Ok(())
    }
}
