//! Terminal host - the page replaced by stdout and a data directory
//!
//! Every command opens a fresh frontend (a page load), acts on it and flushes
//! before exiting (the page unload).

use anyhow::{Context, Result};
use std::path::PathBuf;

use gbweb_core::{
    Config, DirectoryStore, DownloadArtifact, EmulatorModule, Frontend, HostEvent, Labels,
    LocalFile, Slot, UiSurface, Vfs, config,
};
use gbweb_shared::KeyEvent;

/// Global options shared by session commands.
#[derive(Debug, Clone, Default)]
pub struct HostOptions {
    pub data_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub type CliFrontend = Frontend<HeadlessModule, DirectoryStore, ConsoleUi>;

/// Load config, resolve the store directory and start a frontend on it.
///
/// The headless module is attached immediately; there is no engine to wait
/// for.
pub async fn open(options: &HostOptions) -> Result<CliFrontend> {
    let mut config = match &options.config {
        Some(path) => config::load_from(path)?,
        None => config::load(),
    };
    if let Some(dir) = &options.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
    let store_dir = resolve_store_dir(&config)?;
    tracing::debug!("Using store directory {}", store_dir.display());

    let mut fe = Frontend::new(config, DirectoryStore::new(store_dir), ConsoleUi::default());
    fe.attach_module(HeadlessModule::default());
    fe.start().await?;
    Ok(fe)
}

/// Handle one event through the frontend's reporter.
///
/// The failure has already been printed by [`ConsoleUi`]; the returned error
/// names the event and sets the exit status.
pub async fn send(fe: &mut CliFrontend, event: HostEvent<LocalFile>) -> Result<()> {
    let name = event.name();
    fe.handle(event)
        .await
        .with_context(|| format!("{name} failed"))
}

fn resolve_store_dir(config: &Config) -> Result<PathBuf> {
    config
        .store_dir()
        .context("Could not determine data directory; pass --data-dir")
}

// ============================================================================
// UI
// ============================================================================

/// Prints what the page would show.
#[derive(Debug, Default)]
pub struct ConsoleUi {
    pub labels: Labels,
    pub errors: Vec<String>,
    pub offered: Vec<DownloadArtifact>,
}

impl UiSurface for ConsoleUi {
    fn set_label(&mut self, slot: Slot, text: &str) {
        tracing::debug!("{:?} label: {}", slot, text);
        self.labels.set(slot, text);
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("gbweb: {message}");
        self.errors.push(message.to_string());
    }

    fn offer_download(&mut self, artifact: &DownloadArtifact) {
        self.offered.push(artifact.clone());
    }

    fn dispatch_key(&mut self, event: KeyEvent) {
        println!("{} keyCode={}", event.kind.event_type(), event.code);
    }
}

// ============================================================================
// Module
// ============================================================================

/// Stand-in engine with no CPU.
///
/// Keeps the cartridge's save RAM exactly as bound, so a load and flush
/// round-trips it through the same calls a real engine receives.
#[derive(Debug, Default)]
pub struct HeadlessModule {
    title: Option<String>,
    save_ram: Option<Vec<u8>>,
}

impl HeadlessModule {
    /// Cartridge title from the header, once a ROM is loaded.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Title field of the cartridge header (0x134..0x144), NUL-padded ASCII.
pub fn cartridge_title(rom: &[u8]) -> Option<String> {
    let field = rom.get(0x134..0x144)?;
    let title: String = field
        .iter()
        .take_while(|&&b| b != 0)
        .filter(|b| b.is_ascii_graphic() || **b == b' ')
        .map(|&b| b as char)
        .collect();
    let title = title.trim().to_string();
    (!title.is_empty()).then_some(title)
}

impl EmulatorModule for HeadlessModule {
    fn load(&mut self, vfs: &mut Vfs, rom_path: &str, save_path: &str) -> Result<()> {
        let rom = vfs.read(rom_path)?;
        self.title = cartridge_title(rom);
        self.save_ram = vfs.read(save_path).ok().map(<[u8]>::to_vec);
        Ok(())
    }

    fn save(&mut self, vfs: &mut Vfs, save_path: &str) -> Result<()> {
        if let Some(ram) = &self.save_ram {
            vfs.write(save_path, ram.clone())?;
        }
        Ok(())
    }
}
