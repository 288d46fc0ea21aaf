//! Shared test utilities for integration and unit tests

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use anyhow::Result;
use gbweb_shared::KeyEvent;

use crate::config::Config;
use crate::download::DownloadArtifact;
use crate::frontend::Frontend;
use crate::module::EmulatorModule;
use crate::source::FileSource;
use crate::store::{DurableStore, MemoryStore, StoreError};
use crate::ui::{Labels, Slot, UiSurface};
use crate::vfs::{Entries, Vfs};

/// Ordered record of module calls and store syncs, shared by the fakes.
pub type Journal = Rc<RefCell<Vec<String>>>;

pub type TestFrontend = Frontend<RecordingModule, JournalStore, RecordingUi>;

// ============================================================================
// Files
// ============================================================================

/// A picked file with canned contents, or a canned read failure.
#[derive(Debug, Clone)]
pub struct FakeFile {
    name: String,
    contents: Option<Vec<u8>>,
    len_hint: Option<u64>,
}

impl FakeFile {
    pub fn new(name: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            contents: Some(bytes),
            len_hint: None,
        }
    }

    /// A file whose read fails, like a revoked browser file handle.
    pub fn failing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            contents: None,
            len_hint: None,
        }
    }

    pub fn with_len_hint(mut self, len: u64) -> Self {
        self.len_hint = Some(len);
        self
    }
}

#[async_trait::async_trait(?Send)]
impl FileSource for FakeFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn len_hint(&self) -> Option<u64> {
        self.len_hint
    }

    async fn read(&self) -> io::Result<Vec<u8>> {
        tokio::task::yield_now().await;
        self.contents
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::PermissionDenied, "file handle revoked"))
    }
}

// ============================================================================
// Emulator module
// ============================================================================

/// Module double: journals calls and owns a fake save RAM.
///
/// `load` seeds save RAM from the save entry (if any); `save` writes it back.
/// With no cartridge running `save` writes nothing.
#[derive(Debug)]
pub struct RecordingModule {
    journal: Journal,
    pub rom: Option<Vec<u8>>,
    pub save_ram: Option<Vec<u8>>,
    pub fail_save: bool,
}

impl RecordingModule {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            rom: None,
            save_ram: None,
            fail_save: false,
        }
    }
}

impl EmulatorModule for RecordingModule {
    fn load(&mut self, vfs: &mut Vfs, rom_path: &str, save_path: &str) -> Result<()> {
        self.journal
            .borrow_mut()
            .push(format!("load({rom_path},{save_path})"));
        self.rom = Some(vfs.read(rom_path)?.to_vec());
        self.save_ram = vfs
            .read(save_path)
            .ok()
            .filter(|bytes| !bytes.is_empty())
            .map(<[u8]>::to_vec);
        Ok(())
    }

    fn save(&mut self, vfs: &mut Vfs, save_path: &str) -> Result<()> {
        self.journal.borrow_mut().push(format!("save({save_path})"));
        if self.fail_save {
            anyhow::bail!("save RAM unavailable");
        }
        if let Some(ram) = &self.save_ram {
            vfs.write(save_path, ram.clone())?;
        }
        Ok(())
    }
}

// ============================================================================
// Durable store
// ============================================================================

/// Memory store that journals syncs and can be told to fail.
#[derive(Debug)]
pub struct JournalStore {
    inner: MemoryStore,
    journal: Journal,
    pub fail_pull: bool,
    pub fail_push: bool,
}

impl JournalStore {
    pub fn new(inner: MemoryStore, journal: Journal) -> Self {
        Self {
            inner,
            journal,
            fail_pull: false,
            fail_push: false,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl DurableStore for JournalStore {
    async fn pull(&mut self) -> Result<Entries, StoreError> {
        if self.fail_pull {
            return Err(StoreError::Unavailable("database blocked".into()));
        }
        self.journal.borrow_mut().push("pull".into());
        self.inner.pull().await
    }

    async fn push(&mut self, entries: &Entries) -> Result<(), StoreError> {
        tokio::task::yield_now().await;
        if self.fail_push {
            return Err(StoreError::Unavailable("quota exceeded".into()));
        }
        self.journal.borrow_mut().push("push".into());
        self.inner.push(entries).await
    }
}

// ============================================================================
// UI
// ============================================================================

/// UI double recording everything the core asks the page to do.
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub labels: Labels,
    pub label_changes: Vec<(Slot, String)>,
    pub errors: Vec<String>,
    pub downloads: Vec<DownloadArtifact>,
    pub keys: Vec<KeyEvent>,
}

impl UiSurface for RecordingUi {
    fn set_label(&mut self, slot: Slot, text: &str) {
        self.labels.set(slot, text);
        self.label_changes.push((slot, text.to_string()));
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn offer_download(&mut self, artifact: &DownloadArtifact) {
        self.downloads.push(artifact.clone());
    }

    fn dispatch_key(&mut self, event: KeyEvent) {
        self.keys.push(event);
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Frontend over `store` with the module attached. Not started.
pub fn frontend_with(config: Config, store: MemoryStore) -> (TestFrontend, Journal, MemoryStore) {
    let (mut fe, journal, store) = pending_frontend_with(config, store);
    fe.attach_module(RecordingModule::new(journal.clone()));
    (fe, journal, store)
}

/// Fresh frontend with the module attached. Not started.
pub fn frontend() -> (TestFrontend, Journal, MemoryStore) {
    frontend_with(Config::default(), MemoryStore::new())
}

/// Fresh frontend whose module runtime has not initialized yet.
pub fn pending_frontend() -> (TestFrontend, Journal, MemoryStore) {
    pending_frontend_with(Config::default(), MemoryStore::new())
}

fn pending_frontend_with(config: Config, store: MemoryStore) -> (TestFrontend, Journal, MemoryStore) {
    let journal = Journal::default();
    let fe = Frontend::new(
        config,
        JournalStore::new(store.clone(), journal.clone()),
        RecordingUi::default(),
    );
    (fe, journal, store)
}
