//! Host UI surface
//!
//! The few things the core needs from the page: picker labels, an error line,
//! a download prompt and synthetic key dispatch.

use gbweb_shared::{DEFAULT_ROM_LABEL, DEFAULT_SAVE_LABEL, KeyEvent, ROM_PATH, SAVE_PATH};

use crate::download::DownloadArtifact;

/// A file picker bound to a fixed VFS entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Rom,
    Save,
}

impl Slot {
    /// VFS entry the picker writes.
    pub const fn path(self) -> &'static str {
        match self {
            Slot::Rom => ROM_PATH,
            Slot::Save => SAVE_PATH,
        }
    }

    /// Label shown when nothing is bound.
    pub const fn default_label(self) -> &'static str {
        match self {
            Slot::Rom => DEFAULT_ROM_LABEL,
            Slot::Save => DEFAULT_SAVE_LABEL,
        }
    }
}

/// Page elements the core drives.
pub trait UiSurface {
    fn set_label(&mut self, slot: Slot, text: &str);

    /// Show a one-line failure message.
    fn show_error(&mut self, message: &str);

    /// Offer `artifact` to the user as a file download.
    fn offer_download(&mut self, artifact: &DownloadArtifact);

    /// Dispatch a synthetic keyboard event on the page body.
    fn dispatch_key(&mut self, event: KeyEvent);
}

/// Current picker labels, for hosts that render them themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub rom: String,
    pub save: String,
}

impl Labels {
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Rom => &self.rom,
            Slot::Save => &self.save,
        }
    }

    pub fn set(&mut self, slot: Slot, text: &str) {
        match slot {
            Slot::Rom => self.rom = text.to_string(),
            Slot::Save => self.save = text.to_string(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            rom: DEFAULT_ROM_LABEL.to_string(),
            save: DEFAULT_SAVE_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_map_to_fixed_paths() {
        assert_eq!(Slot::Rom.path(), "rom.gb");
        assert_eq!(Slot::Save.path(), "ram.sav");
        assert_eq!(Slot::Save.default_label(), "Select Save");
    }

    #[test]
    fn labels_start_at_defaults() {
        let mut labels = Labels::default();
        assert_eq!(labels.get(Slot::Rom), "Select ROM");

        labels.set(Slot::Save, "zelda.sav");
        assert_eq!(labels.get(Slot::Save), "zelda.sav");
        assert_eq!(labels.get(Slot::Rom), "Select ROM");
    }
}
