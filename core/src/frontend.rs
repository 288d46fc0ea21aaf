//! Frontend context
//!
//! Owns every piece of front-end state (VFS, session, module handle, durable
//! store, UI) and routes host events to the binding and persistence
//! operations. All operations take `&mut self`, so events are handled one at a
//! time in arrival order even though reads and syncs suspend.

use gbweb_shared::Button;

use crate::config::Config;
use crate::error::FrontendError;
use crate::keypad::Keypad;
use crate::module::{EmulatorModule, ModuleGate};
use crate::session::Session;
use crate::source::FileSource;
use crate::store::DurableStore;
use crate::ui::{Slot, UiSurface};
use crate::vfs::Vfs;

/// Page visibility as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Something the user or the page lifecycle did.
#[derive(Debug)]
pub enum HostEvent<F> {
    /// ROM picker changed; `None` when the dialog was dismissed.
    RomSelected(Option<F>),
    /// Save picker changed; `None` when the dialog was dismissed.
    SaveSelected(Option<F>),
    LoadClicked,
    /// Save/Download button.
    SaveClicked,
    BeforeUnload,
    VisibilityChanged(Visibility),
    ButtonEnter(Button),
    ButtonLeave(Button),
}

impl<F> HostEvent<F> {
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::RomSelected(_) => "rom-selected",
            HostEvent::SaveSelected(_) => "save-selected",
            HostEvent::LoadClicked => "load",
            HostEvent::SaveClicked => "save",
            HostEvent::BeforeUnload => "beforeunload",
            HostEvent::VisibilityChanged(_) => "visibilitychange",
            HostEvent::ButtonEnter(_) => "pointerenter",
            HostEvent::ButtonLeave(_) => "pointerleave",
        }
    }
}

/// The front-end, generic over the engine, the durable store and the page.
pub struct Frontend<M, S, U> {
    pub(crate) config: Config,
    pub(crate) vfs: Vfs,
    pub(crate) session: Session,
    pub(crate) module: ModuleGate<M>,
    pub(crate) store: S,
    pub(crate) ui: U,
    pub(crate) keypad: Keypad,
}

impl<M, S, U> Frontend<M, S, U>
where
    M: EmulatorModule,
    S: DurableStore,
    U: UiSurface,
{
    /// Create a frontend with an empty VFS mounted per `config`.
    ///
    /// Call [`Frontend::start`] before handling events so the previous session
    /// is pulled from `store`.
    pub fn new(config: Config, store: S, ui: U) -> Self {
        let vfs = Vfs::mount(&config.storage.mount_point);
        Self {
            config,
            vfs,
            session: Session::default(),
            module: ModuleGate::default(),
            store,
            ui,
            keypad: Keypad::new(),
        }
    }

    /// The engine runtime finished initializing; module calls are now allowed.
    pub fn attach_module(&mut self, module: M) {
        tracing::info!("Emulator module initialized");
        self.module.attach(module);
    }

    pub fn module_ready(&self) -> bool {
        self.module.is_ready()
    }

    pub fn module(&self) -> Option<&M> {
        self.module.module()
    }

    pub fn module_mut(&mut self) -> Option<&mut M> {
        self.module.module_mut()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Handle one host event, reporting any failure.
    ///
    /// The error is also returned so hosts can react (e.g. an exit code).
    pub async fn handle<F: FileSource>(&mut self, event: HostEvent<F>) -> Result<(), FrontendError> {
        let name = event.name();
        let result = self.dispatch(event).await;
        if let Err(err) = &result {
            self.report(name, err);
        }
        result
    }

    /// Route one host event without reporting.
    pub async fn dispatch<F: FileSource>(&mut self, event: HostEvent<F>) -> Result<(), FrontendError> {
        match event {
            HostEvent::RomSelected(file) => self.bind_file(file, Slot::Rom).await,
            HostEvent::SaveSelected(file) => self.bind_file(file, Slot::Save).await,
            HostEvent::LoadClicked => self.load(),
            HostEvent::SaveClicked => self.download().await.map(|_| ()),
            HostEvent::BeforeUnload => self.flush(crate::sync::FlushReason::Unload).await,
            HostEvent::VisibilityChanged(Visibility::Hidden) => {
                for key in self.keypad.release_all() {
                    self.ui.dispatch_key(key);
                }
                self.flush(crate::sync::FlushReason::Hidden).await
            }
            HostEvent::VisibilityChanged(Visibility::Visible) => Ok(()),
            HostEvent::ButtonEnter(button) => {
                if let Some(key) = self.keypad.press(button) {
                    self.ui.dispatch_key(key);
                }
                Ok(())
            }
            HostEvent::ButtonLeave(button) => {
                if let Some(key) = self.keypad.release(button) {
                    self.ui.dispatch_key(key);
                }
                Ok(())
            }
        }
    }

    /// Single sink for operation failures: log, then tell the user.
    pub(crate) fn report(&mut self, event: &str, err: &FrontendError) {
        if err.is_data_loss() {
            tracing::error!("{} failed, unsaved data may be lost: {}", event, err);
        } else {
            tracing::error!("{} failed: {}", event, err);
        }
        self.ui.show_error(&err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeFile, RecordingModule, RecordingUi, frontend};
    use gbweb_shared::{KeyEvent, KeyEventKind};

    type Event = HostEvent<FakeFile>;

    #[tokio::test]
    async fn buttons_inject_key_events() {
        let (mut fe, _, _) = frontend();

        fe.handle(Event::ButtonEnter(Button::Left)).await.unwrap();
        fe.handle(Event::ButtonEnter(Button::Left)).await.unwrap();
        fe.handle(Event::ButtonLeave(Button::Left)).await.unwrap();
        fe.handle(Event::ButtonLeave(Button::Left)).await.unwrap();

        assert_eq!(
            fe.ui().keys,
            vec![KeyEvent::down(Button::Left), KeyEvent::up(Button::Left)]
        );
    }

    #[tokio::test]
    async fn hiding_the_page_releases_held_buttons_and_flushes() {
        let (mut fe, _, store) = frontend();
        fe.handle(Event::ButtonEnter(Button::A)).await.unwrap();

        fe.handle(Event::VisibilityChanged(Visibility::Hidden))
            .await
            .unwrap();

        let last = fe.ui().keys.last().copied().unwrap();
        assert_eq!(last.kind, KeyEventKind::KeyUp);
        assert_eq!(last.code, 88);
        assert_eq!(store.push_count(), 1);
    }

    #[tokio::test]
    async fn becoming_visible_does_not_flush() {
        let (mut fe, _, store) = frontend();
        fe.handle(Event::VisibilityChanged(Visibility::Visible))
            .await
            .unwrap();
        assert_eq!(store.push_count(), 0);
    }

    #[tokio::test]
    async fn failures_reach_the_ui_once() {
        let (mut fe, _, _) = frontend();
        fe.handle(Event::RomSelected(Some(FakeFile::failing("zelda.gb"))))
            .await
            .unwrap_err();

        assert_eq!(fe.ui().errors.len(), 1);
        assert!(fe.ui().errors[0].contains("zelda.gb"));
    }

    #[tokio::test]
    async fn dispatch_does_not_report() {
        let (mut fe, _, _) = frontend();
        fe.dispatch(Event::RomSelected(Some(FakeFile::failing("zelda.gb"))))
            .await
            .unwrap_err();
        assert!(fe.ui().errors.is_empty());
    }

    #[test]
    fn event_names_match_dom_events() {
        assert_eq!(Event::BeforeUnload.name(), "beforeunload");
        assert_eq!(
            Event::VisibilityChanged(Visibility::Hidden).name(),
            "visibilitychange"
        );
        assert_eq!(Event::ButtonEnter(Button::A).name(), "pointerenter");
    }

    #[test]
    fn new_frontend_mounts_configured_point() {
        let mut config = Config::default();
        config.storage.mount_point = "/saves".into();
        let fe: Frontend<RecordingModule, crate::store::MemoryStore, RecordingUi> =
            Frontend::new(config, crate::store::MemoryStore::new(), RecordingUi::default());
        assert_eq!(fe.vfs().mount_point(), "/saves");
        assert!(!fe.module_ready());
    }
}
