//! Virtual file store
//!
//! An in-process namespace of byte blobs mounted at a single mount point
//! (`/data` by default) and mirrored to a durable store on demand. The front-end
//! and the emulator module both address entries by flat name; the absolute
//! form under the mount point names the same entry.

use std::collections::BTreeMap;

use gbweb_shared::STAGING_SUFFIX;

/// Snapshot of every entry, keyed by flat name.
pub type Entries = BTreeMap<String, Vec<u8>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VfsError {
    #[error("invalid VFS path '{0}'")]
    InvalidPath(String),

    #[error("no such VFS entry '{0}'")]
    NotFound(String),

    #[error("VFS entry '{0}' is not valid UTF-8")]
    NotUtf8(String),
}

/// Path-keyed byte store. Owns entry bytes exclusively.
#[derive(Debug, Clone)]
pub struct Vfs {
    mount_point: String,
    entries: Entries,
}

impl Vfs {
    /// Create an empty store mounted at `mount_point`.
    pub fn mount(mount_point: &str) -> Self {
        let trimmed = mount_point.trim_end_matches('/');
        let mount_point = if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            mount_point,
            entries: Entries::new(),
        }
    }

    pub fn mount_point(&self) -> &str {
        &self.mount_point
    }

    /// Resolve `path` to its flat entry name.
    ///
    /// Accepts `rom.gb` or `/data/rom.gb`; rejects nesting, traversal, paths
    /// outside the mount point and names the durable store reserves.
    pub fn resolve<'a>(&self, path: &'a str) -> Result<&'a str, VfsError> {
        let name = if path.starts_with('/') {
            let prefix = self.mount_point.trim_end_matches('/');
            path.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('/'))
                .ok_or_else(|| VfsError::InvalidPath(path.to_string()))?
        } else {
            path
        };

        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
            || name.ends_with(STAGING_SUFFIX)
        {
            return Err(VfsError::InvalidPath(path.to_string()));
        }
        Ok(name)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.resolve(path)
            .map(|name| self.entries.contains_key(name))
            .unwrap_or(false)
    }

    pub fn read(&self, path: &str) -> Result<&[u8], VfsError> {
        let name = self.resolve(path)?;
        self.entries
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| VfsError::NotFound(name.to_string()))
    }

    pub fn read_to_string(&self, path: &str) -> Result<String, VfsError> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| VfsError::NotUtf8(path.to_string()))
    }

    /// Write `bytes` at `path`, replacing any previous content wholesale.
    pub fn write(&mut self, path: &str, bytes: impl Into<Vec<u8>>) -> Result<(), VfsError> {
        let name = self.resolve(path)?.to_string();
        self.entries.insert(name, bytes.into());
        Ok(())
    }

    /// Remove the entry at `path`. Returns whether it existed.
    pub fn remove(&mut self, path: &str) -> Result<bool, VfsError> {
        let name = self.resolve(path)?;
        Ok(self.entries.remove(name).is_some())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Copy of every entry, for pushing to a durable store.
    pub fn snapshot(&self) -> Entries {
        self.entries.clone()
    }

    /// Replace the whole namespace with entries pulled from a durable store.
    ///
    /// Names that would not resolve are dropped.
    pub fn replace_all(&mut self, entries: Entries) {
        self.entries = entries
            .into_iter()
            .filter(|(name, _)| {
                let ok = self.resolve(name).is_ok();
                if !ok {
                    tracing::warn!("Dropping durable entry with invalid name '{}'", name);
                }
                ok
            })
            .collect();
    }
}

impl Default for Vfs {
    fn default() -> Self {
        Self::mount(gbweb_shared::DEFAULT_MOUNT_POINT)
    }
}
