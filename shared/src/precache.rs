//! Offline precache manifest.
//!
//! The host page is served from a service-worker cache populated at install
//! time from a list of `(url, revision)` pairs. A changed revision supersedes
//! the cached copy; a removed URL is evicted.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of digest bytes kept in a revision (32 hex characters).
const REVISION_BYTES: usize = 16;

/// One cached asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecacheEntry {
    /// Forward-slash path relative to the site root.
    pub url: String,
    /// Content hash; changes whenever the file bytes change.
    pub revision: String,
}

/// Ordered list of cached assets, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrecacheManifest {
    pub entries: Vec<PrecacheEntry>,
}

/// Error type for building or parsing a precache manifest.
#[derive(Debug, thiserror::Error)]
pub enum PrecacheError {
    #[error("Failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),

    #[error("Invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Content revision for a blob of bytes.
pub fn revision_of(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    hex::encode(&digest[..REVISION_BYTES])
}

impl PrecacheManifest {
    /// Hash every file under `root`.
    ///
    /// Dotfiles and any relative URL listed in `exclude` (typically the
    /// service worker and the manifest itself) are skipped. Entries are sorted
    /// by URL so regenerated manifests diff cleanly.
    pub fn from_dir(root: &Path, exclude: &[&str]) -> Result<Self, PrecacheError> {
        let mut entries = Vec::new();

        for entry in walkdir::WalkDir::new(root).follow_links(false) {
            let entry = entry.map_err(|source| PrecacheError::Walk {
                root: root.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap_or_else(|_| entry.path());
            let url = url_for(rel)?;

            if url.split('/').any(|part| part.starts_with('.')) || exclude.contains(&url.as_str()) {
                continue;
            }

            let bytes = std::fs::read(entry.path()).map_err(|source| PrecacheError::Io {
                path: entry.path().to_path_buf(),
                source,
            })?;

            entries.push(PrecacheEntry {
                url,
                revision: revision_of(&bytes),
            });
        }

        entries.sort_by(|a, b| a.url.cmp(&b.url));
        Ok(Self { entries })
    }

    /// Look up the revision recorded for `url`.
    pub fn revision(&self, url: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.url == url)
            .map(|e| e.revision.as_str())
    }

    /// URLs cached under this manifest that `newer` replaces or drops.
    pub fn superseded_by(&self, newer: &PrecacheManifest) -> Vec<String> {
        let current: BTreeMap<&str, &str> = newer
            .entries
            .iter()
            .map(|e| (e.url.as_str(), e.revision.as_str()))
            .collect();

        self.entries
            .iter()
            .filter(|old| current.get(old.url.as_str()) != Some(&old.revision.as_str()))
            .map(|old| old.url.clone())
            .collect()
    }

    pub fn to_json(&self) -> Result<String, PrecacheError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PrecacheError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the assignment the service worker imports before precaching.
    pub fn to_worker_script(&self) -> Result<String, PrecacheError> {
        Ok(format!("self.__precacheManifest = {};\n", self.to_json()?))
    }
}

fn url_for(rel: &Path) -> Result<String, PrecacheError> {
    let mut parts = Vec::new();
    for component in rel.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| PrecacheError::NonUtf8Path(rel.to_path_buf()))?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}
