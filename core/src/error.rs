//! Error taxonomy for front-end operations.
//!
//! Missing input (no file selected, no ROM at load time) is not an error:
//! those paths return `Ok(())`. Everything here is surfaced through the
//! frontend's single reporter.

use crate::store::StoreError;
use crate::vfs::VfsError;

/// Failure of a front-end operation.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    /// The selected file could not be read.
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The selected file exceeds the configured size limit.
    #[error("{name} is too large ({len} bytes, max {max} bytes)")]
    TooLarge { name: String, len: u64, max: u64 },

    #[error(transparent)]
    Vfs(#[from] VfsError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A module entry point was called before the runtime finished initializing.
    #[error("emulator module not initialized; {op}() ignored")]
    ModuleNotReady { op: &'static str },

    /// The module reported a failure from one of its entry points.
    #[error("emulator module {op}() failed: {source}")]
    Module {
        op: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl FrontendError {
    /// Whether the failure can have lost data that the user believes is persisted.
    pub fn is_data_loss(&self) -> bool {
        matches!(self, FrontendError::Store(_) | FrontendError::Module { op: "save", .. })
    }
}
