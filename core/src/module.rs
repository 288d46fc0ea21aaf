//! Emulator module boundary
//!
//! The compiled engine is a black box reached through two entry points. It
//! reads and writes the agreed VFS paths itself; the front-end never inspects
//! emulation state.

use anyhow::Result;

use crate::error::FrontendError;
use crate::vfs::Vfs;

/// The two entry points exposed by a compiled emulator engine.
///
/// Both are synchronous from the caller's side. The VFS is passed explicitly
/// because the engine's only channel to the front-end is the file store.
pub trait EmulatorModule {
    /// (Re)start emulation from the ROM at `rom_path`, seeding save RAM from
    /// `save_path`. A missing or empty save entry means "no prior save data".
    fn load(&mut self, vfs: &mut Vfs, rom_path: &str, save_path: &str) -> Result<()>;

    /// Write current save RAM to `save_path`.
    fn save(&mut self, vfs: &mut Vfs, save_path: &str) -> Result<()>;
}

/// Holds the module until its runtime reports initialization.
///
/// Calls made while pending fail fast and leave the VFS untouched.
#[derive(Debug)]
pub enum ModuleGate<M> {
    Pending,
    Ready(M),
}

impl<M> Default for ModuleGate<M> {
    fn default() -> Self {
        ModuleGate::Pending
    }
}

impl<M: EmulatorModule> ModuleGate<M> {
    /// Runtime initialized: start forwarding calls to `module`.
    pub fn attach(&mut self, module: M) {
        *self = ModuleGate::Ready(module);
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModuleGate::Ready(_))
    }

    pub fn module(&self) -> Option<&M> {
        match self {
            ModuleGate::Ready(module) => Some(module),
            ModuleGate::Pending => None,
        }
    }

    pub fn module_mut(&mut self) -> Option<&mut M> {
        match self {
            ModuleGate::Ready(module) => Some(module),
            ModuleGate::Pending => None,
        }
    }

    pub fn load(
        &mut self,
        vfs: &mut Vfs,
        rom_path: &str,
        save_path: &str,
    ) -> Result<(), FrontendError> {
        let module = self.ready("load")?;
        module
            .load(vfs, rom_path, save_path)
            .map_err(|source| FrontendError::Module { op: "load", source })
    }

    pub fn save(&mut self, vfs: &mut Vfs, save_path: &str) -> Result<(), FrontendError> {
        let module = self.ready("save")?;
        module
            .save(vfs, save_path)
            .map_err(|source| FrontendError::Module { op: "save", source })
    }

    fn ready(&mut self, op: &'static str) -> Result<&mut M, FrontendError> {
        match self {
            ModuleGate::Ready(module) => Ok(module),
            ModuleGate::Pending => {
                tracing::warn!("Emulator module not initialized, ignoring {}()", op);
                Err(FrontendError::ModuleNotReady { op })
            }
        }
    }
}
