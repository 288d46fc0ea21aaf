//! Session state
//!
//! Tracks which cartridge is active so labels and download names can be
//! derived, and so the UI can be restored after a reload without re-uploading.

use gbweb_shared::{ROM_EXTENSION, SAVE_EXTENSION, SAVE_PATH, SESSION_NAME_PATH};

use crate::vfs::{Vfs, VfsError};

/// Strip the final extension from a file name.
///
/// The suffix after the last `.` is removed when it is non-empty and contains
/// no `/`. `zelda.gb` becomes `zelda`; `trailing.` and `noext` are unchanged.
pub fn base_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) => {
            let ext = &file_name[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                file_name
            } else {
                &file_name[..dot]
            }
        }
        None => file_name,
    }
}

/// The active cartridge, as far as the front-end knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Base name of the last uploaded ROM, without extension.
    pub last_filename: Option<String>,
}

impl Session {
    /// Session for a freshly uploaded ROM named `file_name`.
    pub fn from_file_name(file_name: &str) -> Self {
        Self {
            last_filename: Some(base_name(file_name).to_string()),
        }
    }

    /// Write the session name record.
    pub fn persist(&self, vfs: &mut Vfs) -> Result<(), VfsError> {
        match &self.last_filename {
            Some(name) => vfs.write(SESSION_NAME_PATH, name.as_bytes()),
            None => vfs.remove(SESSION_NAME_PATH).map(|_| ()),
        }
    }

    /// Read the session name record, if one was persisted.
    pub fn restore(vfs: &Vfs) -> Result<Option<Self>, VfsError> {
        if !vfs.exists(SESSION_NAME_PATH) {
            return Ok(None);
        }
        let name = vfs.read_to_string(SESSION_NAME_PATH)?;
        Ok(Some(Self {
            last_filename: Some(name),
        }))
    }

    pub fn rom_label(&self) -> Option<String> {
        self.last_filename
            .as_ref()
            .map(|name| format!("{name}.{ROM_EXTENSION}"))
    }

    pub fn save_label(&self) -> Option<String> {
        self.last_filename
            .as_ref()
            .map(|name| format!("{name}.{SAVE_EXTENSION}"))
    }

    /// File name offered when save RAM is downloaded.
    pub fn download_name(&self) -> String {
        self.save_label().unwrap_or_else(|| SAVE_PATH.to_string())
    }
}
