//! Durable backing stores
//!
//! The VFS lives in memory; a durable store mirrors it across restarts.
//! Sync is explicit: `pull` once at startup, `push` on every flush. Pushes are
//! best effort with no transaction spanning entries.

mod directory;
mod memory;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::vfs::Entries;

/// Error type for durable store synchronization.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("durable store I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("durable store unavailable: {0}")]
    Unavailable(String),

    #[error("entry name '{0}' is reserved by the durable store")]
    ReservedName(String),
}

/// Out-of-process storage that survives reloads.
///
/// Hosts drive a single frontend on one thread, so implementations need not
/// be `Send`.
#[async_trait::async_trait(?Send)]
pub trait DurableStore {
    /// Load every persisted entry. An empty store yields no entries.
    async fn pull(&mut self) -> Result<Entries, StoreError>;

    /// Persist `entries` as the complete contents of the store.
    async fn push(&mut self, entries: &Entries) -> Result<(), StoreError>;
}
