//! Persistence synchronization
//!
//! Startup pulls the durable store into the VFS and restores the session
//! labels. Every flush asks the module to write save RAM first and only then
//! pushes the VFS, so a push never captures a stale save entry.

use gbweb_shared::{ROM_PATH, SAVE_PATH};

use crate::download::DownloadArtifact;
use crate::error::FrontendError;
use crate::frontend::Frontend;
use crate::module::EmulatorModule;
use crate::session::Session;
use crate::store::DurableStore;
use crate::ui::{Slot, UiSurface};

/// Why a flush was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushReason {
    /// Save/Download button.
    Explicit,
    /// Page is being unloaded.
    Unload,
    /// Page became hidden.
    Hidden,
}

impl<M, S, U> Frontend<M, S, U>
where
    M: EmulatorModule,
    S: DurableStore,
    U: UiSurface,
{
    /// Mount: pull the durable store, then restore the previous session.
    ///
    /// If the pull fails the VFS stays empty and the UI keeps its defaults.
    pub async fn start(&mut self) -> Result<(), FrontendError> {
        let entries = self.store.pull().await?;
        tracing::info!(
            "Mounted {} with {} persisted entries",
            self.vfs.mount_point(),
            entries.len()
        );
        self.vfs.replace_all(entries);
        self.restore_session()
    }

    /// Restore the session name and picker labels from the VFS.
    ///
    /// Purely cosmetic: the ROM is not loaded into the module. The save label
    /// is only restored when a save entry is actually present.
    pub fn restore_session(&mut self) -> Result<(), FrontendError> {
        let Some(session) = Session::restore(&self.vfs)? else {
            tracing::debug!("No previous session");
            return Ok(());
        };

        if let Some(label) = session.rom_label() {
            self.ui.set_label(Slot::Rom, &label);
        }
        if self.vfs.exists(SAVE_PATH) {
            if let Some(label) = session.save_label() {
                self.ui.set_label(Slot::Save, &label);
            }
        }

        tracing::info!(
            "Restored session '{}'",
            session.last_filename.as_deref().unwrap_or_default()
        );
        self.session = session;
        Ok(())
    }

    /// Start emulation from the bound ROM. No ROM bound is a no-op.
    pub fn load(&mut self) -> Result<(), FrontendError> {
        if !self.vfs.exists(ROM_PATH) {
            tracing::debug!("No ROM bound, ignoring load");
            return Ok(());
        }

        self.module.load(&mut self.vfs, ROM_PATH, SAVE_PATH)?;
        tracing::info!(
            "Started {}",
            self.session.rom_label().as_deref().unwrap_or(ROM_PATH)
        );
        Ok(())
    }

    /// Write save RAM through the module, then push the VFS to the durable store.
    ///
    /// A module that is not yet initialized has no save RAM to write; the VFS
    /// is still pushed. A module failure does not prevent the push. Push
    /// failures are not retried. When both fail, the module failure is
    /// reported here and the push failure is returned.
    pub async fn flush(&mut self, reason: FlushReason) -> Result<(), FrontendError> {
        tracing::debug!("Flushing VFS ({:?})", reason);

        let saved = match self.module.save(&mut self.vfs, SAVE_PATH) {
            Err(FrontendError::ModuleNotReady { .. }) => Ok(()),
            other => other,
        };

        let snapshot = self.vfs.snapshot();
        if let Err(err) = self.store.push(&snapshot).await {
            tracing::error!("Durable store push failed ({:?}): {}", reason, err);
            if let Err(module_err) = &saved {
                self.report("flush", module_err);
            }
            return Err(err.into());
        }

        saved
    }

    /// Flush, then offer the save RAM as `<session>.sav`.
    ///
    /// Returns `Ok(None)` when there is no save entry. The artifact is still
    /// offered when the push fails, so the user can keep a copy; the push
    /// error is returned afterwards.
    pub async fn download(&mut self) -> Result<Option<DownloadArtifact>, FrontendError> {
        let flushed = self.flush(FlushReason::Explicit).await;

        let artifact = match self.vfs.read(SAVE_PATH) {
            Ok(bytes) => DownloadArtifact {
                file_name: self.session.download_name(),
                content_type: self.config.download.content_type.clone(),
                bytes: bytes.to_vec(),
            },
            Err(_) => {
                tracing::debug!("No save RAM to download");
                return flushed.map(|_| None);
            }
        };

        self.ui.offer_download(&artifact);
        tracing::info!(
            "Offered {} ({} bytes)",
            artifact.file_name,
            artifact.bytes.len()
        );
        flushed.map(|_| Some(artifact))
    }
}
