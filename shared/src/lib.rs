//! Shared types for the gbweb emulator front-end.
//!
//! Plain data that every host agrees on: the fixed VFS namespace, upload size
//! limits, the virtual keycode table and the offline precache manifest.

pub mod fs;
pub mod keypad;
pub mod paths;
pub mod precache;

pub use fs::{MAX_MANIFEST_BYTES, MAX_ROM_BYTES, MAX_SAVE_BYTES, read_file_with_limit};
pub use keypad::{Button, KeyEvent, KeyEventKind};
pub use paths::{
    DEFAULT_MOUNT_POINT, DEFAULT_ROM_LABEL, DEFAULT_SAVE_LABEL, ROM_EXTENSION, ROM_PATH,
    SAVE_EXTENSION, SAVE_PATH, SESSION_NAME_PATH, STAGING_SUFFIX,
};
pub use precache::{PrecacheEntry, PrecacheError, PrecacheManifest};
