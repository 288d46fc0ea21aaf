//! Fixed VFS namespace shared by the front-end and the emulator module.
//!
//! The compiled engine opens these names directly, so they must stay stable
//! across hosts.

/// Cartridge ROM entry.
pub const ROM_PATH: &str = "rom.gb";

/// Battery-backed save RAM entry.
pub const SAVE_PATH: &str = "ram.sav";

/// UTF-8 record holding the session name (base name of the last ROM, no extension).
pub const SESSION_NAME_PATH: &str = "filename.txt";

/// Suffix of in-flight durable-store writes. Never a valid entry name.
pub const STAGING_SUFFIX: &str = ".gbweb-tmp";

/// Where the durable store is mounted inside the VFS.
pub const DEFAULT_MOUNT_POINT: &str = "/data";

/// Extension appended to the session name for the ROM label.
pub const ROM_EXTENSION: &str = "gb";

/// Extension appended to the session name for the save label and download.
pub const SAVE_EXTENSION: &str = "sav";

/// ROM picker label when no cartridge is bound.
pub const DEFAULT_ROM_LABEL: &str = "Select ROM";

/// Save picker label when no save RAM is bound.
pub const DEFAULT_SAVE_LABEL: &str = "Select Save";
