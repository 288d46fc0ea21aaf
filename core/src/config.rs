//! Configuration management (config.toml)
//!
//! Handles loading, saving, and providing defaults for front-end settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use gbweb_shared::{DEFAULT_MOUNT_POINT, MAX_ROM_BYTES, MAX_SAVE_BYTES};

use crate::download::SAVE_CONTENT_TYPE;
use crate::ui::Slot;

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Durable storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Upload size limits
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Session behavior
    #[serde(default)]
    pub session: SessionConfig,
    /// Save download settings
    #[serde(default)]
    pub download: DownloadConfig,
}

/// Where the VFS is mounted and where the durable copy lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// VFS mount point (default: /data)
    #[serde(default = "default_mount_point")]
    pub mount_point: String,
    /// Override for the platform data directory
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest accepted ROM upload in bytes (default: 8 MiB)
    #[serde(default = "default_max_rom_bytes")]
    pub max_rom_bytes: u64,
    /// Largest accepted save upload in bytes (default: 512 KiB)
    #[serde(default = "default_max_save_bytes")]
    pub max_save_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Drop the bound save RAM when a different ROM is uploaded (default: true)
    #[serde(default = "default_true")]
    pub clear_save_on_rom_upload: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Content type attached to downloaded save files
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

fn default_mount_point() -> String {
    DEFAULT_MOUNT_POINT.to_string()
}
fn default_max_rom_bytes() -> u64 {
    MAX_ROM_BYTES
}
fn default_max_save_bytes() -> u64 {
    MAX_SAVE_BYTES
}
fn default_true() -> bool {
    true
}
fn default_content_type() -> String {
    SAVE_CONTENT_TYPE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            mount_point: default_mount_point(),
            data_dir: None,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_rom_bytes: default_max_rom_bytes(),
            max_save_bytes: default_max_save_bytes(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            clear_save_on_rom_upload: default_true(),
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            content_type: default_content_type(),
        }
    }
}

impl LimitsConfig {
    /// Upload limit for the picker bound to `slot`.
    pub fn max_bytes(&self, slot: Slot) -> u64 {
        match slot {
            Slot::Rom => self.max_rom_bytes,
            Slot::Save => self.max_save_bytes,
        }
    }
}

impl Config {
    /// Directory the durable store mirrors the VFS into.
    ///
    /// `<data_dir>/<mount point name>`, e.g. `~/.local/share/gbweb/data`.
    pub fn store_dir(&self) -> Option<PathBuf> {
        let base = self.storage.data_dir.clone().or_else(data_dir)?;
        let mount = self.storage.mount_point.trim_matches('/');
        Some(if mount.is_empty() {
            base
        } else {
            base.join(mount)
        })
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\gbweb\config`
/// On macOS: `~/Library/Application Support/io.gbweb.gbweb`
/// On Linux: `~/.config/gbweb`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.gbweb", "", "gbweb")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns the platform-specific data directory.
///
/// This is where the durable copy of the VFS is stored.
/// Returns `None` if the home directory cannot be determined.
pub fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.gbweb", "", "gbweb")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Loads the configuration from disk.
///
/// Reads `config.toml` from the platform's configuration directory.
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    config_dir()
        .map(|dir| load_or_default(&dir.join("config.toml")))
        .unwrap_or_default()
}

/// Loads the configuration from `path`, falling back to defaults.
///
/// A missing file is silent; an unreadable or malformed one is logged.
pub fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match load_from(path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Using default config: {:#}", err);
            Config::default()
        }
    }
}

/// Loads the configuration from an explicit file.
///
/// Unlike [`load`], a missing or malformed file is an error.
pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    use anyhow::Context;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// Saves the configuration to disk.
///
/// Writes `config.toml` to the platform's configuration directory.
/// Creates the directory if it doesn't exist.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized, the directory
/// cannot be created or the file cannot be written.
pub fn save(config: &Config) -> std::io::Result<()> {
    if let Some(dir) = config_dir() {
        save_to(config, &dir.join("config.toml"))?;
    }
    Ok(())
}

/// Saves the configuration to an explicit file, creating parent directories.
pub fn save_to(config: &Config, path: &Path) -> std::io::Result<()> {
    let content = toml::to_string_pretty(config).map_err(std::io::Error::other)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
