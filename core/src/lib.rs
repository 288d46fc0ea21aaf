//! gbweb Core - Game Boy emulator front-end
//!
//! This crate binds user-selected ROM and save files into the emulator's
//! virtual filesystem, keeps that filesystem in sync with durable storage,
//! and restores the previous session after a reload.
//!
//! # Architecture
//!
//! - [`Frontend`] - Owns all front-end state and routes [`HostEvent`]s
//! - [`Vfs`] - In-memory filesystem the emulator reads and writes
//! - [`DurableStore`] - Backing store the VFS is pulled from and pushed to
//! - [`EmulatorModule`] - The emulation engine, gated until it initializes
//! - [`UiSurface`] - Labels, errors, downloads and key injection on the page

mod binding;
pub mod config;
mod download;
mod error;
mod frontend;
#[cfg(test)]
mod integration;
mod keypad;
mod module;
mod session;
mod source;
pub mod store;
mod sync;
#[cfg(test)]
pub mod test_utils;
mod ui;
mod vfs;

pub use config::Config;
pub use download::{DownloadArtifact, SAVE_CONTENT_TYPE};
pub use error::FrontendError;
pub use frontend::{Frontend, HostEvent, Visibility};
pub use keypad::Keypad;
pub use module::{EmulatorModule, ModuleGate};
pub use session::{Session, base_name};
pub use source::{FileSource, LocalFile};
pub use store::{DirectoryStore, DurableStore, MemoryStore, StoreError};
pub use sync::FlushReason;
pub use ui::{Labels, Slot, UiSurface};
pub use vfs::{Entries, Vfs, VfsError};
