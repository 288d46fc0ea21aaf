//! File binding
//!
//! Copies a user-selected file into its fixed VFS entry and keeps the picker
//! labels and session name consistent with what was actually written.

use gbweb_shared::SAVE_PATH;

use crate::error::FrontendError;
use crate::frontend::Frontend;
use crate::module::EmulatorModule;
use crate::session::Session;
use crate::source::FileSource;
use crate::store::DurableStore;
use crate::ui::{Slot, UiSurface};

impl<M, S, U> Frontend<M, S, U>
where
    M: EmulatorModule,
    S: DurableStore,
    U: UiSurface,
{
    /// Bind `file` to the VFS entry behind `slot`.
    ///
    /// `None` (dialog dismissed) is a no-op. A save upload first drops the
    /// bound save RAM and resets its label, so the new name is never shown
    /// against stale bytes while the read is in flight. Labels and the session
    /// name change only after the bytes are in the VFS.
    pub async fn bind_file<F: FileSource>(
        &mut self,
        file: Option<F>,
        slot: Slot,
    ) -> Result<(), FrontendError> {
        let Some(file) = file else {
            tracing::debug!("No file selected for {}", slot.path());
            return Ok(());
        };
        let name = file.name().to_string();
        let max = self.config.limits.max_bytes(slot);

        if slot == Slot::Save {
            self.clear_save()?;
        }

        if let Some(len) = file.len_hint() {
            if len > max {
                return Err(FrontendError::TooLarge { name, len, max });
            }
        }

        let bytes = file
            .read()
            .await
            .map_err(|source| FrontendError::Read {
                name: name.clone(),
                source,
            })?;
        let len = bytes.len() as u64;
        if len > max {
            return Err(FrontendError::TooLarge { name, len, max });
        }

        // A new cartridge must not inherit another cartridge's save RAM.
        if slot == Slot::Rom && self.config.session.clear_save_on_rom_upload {
            self.clear_save()?;
        }

        self.vfs.write(slot.path(), bytes)?;

        if slot == Slot::Rom {
            let session = Session::from_file_name(&name);
            session.persist(&mut self.vfs)?;
            self.session = session;
        }

        self.ui.set_label(slot, &name);
        tracing::info!("Bound {} ({} bytes) to {}", name, len, slot.path());
        Ok(())
    }

    /// Drop the save entry, if any, and reset the save picker.
    fn clear_save(&mut self) -> Result<(), FrontendError> {
        if self.vfs.remove(SAVE_PATH)? {
            self.ui.set_label(Slot::Save, Slot::Save.default_label());
            tracing::debug!("Cleared previous save RAM");
        }
        Ok(())
    }
}
