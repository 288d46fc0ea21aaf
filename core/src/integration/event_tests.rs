//! Host event routing tests

use gbweb_shared::{Button, KeyEvent, SAVE_PATH};

use crate::frontend::{HostEvent, Visibility};
use crate::store::MemoryStore;
use crate::test_utils::{FakeFile, frontend, pending_frontend};

use super::test_utils::*;

type Event = HostEvent<FakeFile>;

#[tokio::test]
async fn test_page_flow_through_events() {
    let (mut fe, journal, store) = frontend();

    fe.handle(Event::RomSelected(Some(FakeFile::new("zelda.gb", rom_bytes()))))
        .await
        .unwrap();
    fe.handle(Event::LoadClicked).await.unwrap();
    fe.module_mut().unwrap().save_ram = Some(vec![8; 2]);
    fe.handle(Event::SaveClicked).await.unwrap();
    fe.handle(Event::BeforeUnload).await.unwrap();

    assert_eq!(
        journal.borrow().as_slice(),
        [
            "load(rom.gb,ram.sav)",
            "save(ram.sav)",
            "push",
            "save(ram.sav)",
            "push"
        ]
    );
    assert_eq!(fe.ui().downloads.len(), 1);
    assert_eq!(fe.ui().downloads[0].file_name, "zelda.sav");
    assert_eq!(store.entries()[SAVE_PATH], vec![8; 2]);
    assert!(fe.ui().errors.is_empty());
}

#[tokio::test]
async fn test_dismissed_picker_changes_nothing() {
    let (mut fe, _) = playing("zelda.gb", MemoryStore::new()).await;
    let before = fe.vfs().snapshot();

    fe.handle(Event::RomSelected(None)).await.unwrap();
    fe.handle(Event::SaveSelected(None)).await.unwrap();

    assert_eq!(fe.vfs().snapshot(), before);
    assert_eq!(fe.ui().labels.rom, "zelda.gb");
}

#[tokio::test]
async fn test_load_before_module_ready_is_reported() {
    let (mut fe, journal, _) = pending_frontend();
    fe.handle(Event::RomSelected(Some(FakeFile::new("zelda.gb", rom_bytes()))))
        .await
        .unwrap();

    fe.handle(Event::LoadClicked).await.unwrap_err();

    assert_eq!(fe.ui().errors.len(), 1);
    assert!(fe.ui().errors[0].contains("not initialized"));
    assert!(journal.borrow().is_empty());
}

#[tokio::test]
async fn test_unload_before_module_ready_still_persists() {
    let (mut fe, _, store) = pending_frontend();
    fe.handle(Event::RomSelected(Some(FakeFile::new("zelda.gb", rom_bytes()))))
        .await
        .unwrap();

    fe.handle(Event::BeforeUnload).await.unwrap();

    assert_eq!(store.push_count(), 1);
    assert!(fe.ui().errors.is_empty());
}

#[tokio::test]
async fn test_push_failure_is_shown_to_user() {
    let (mut fe, _, _) = frontend();
    fe.store_mut().fail_push = true;

    fe.handle(Event::VisibilityChanged(Visibility::Hidden))
        .await
        .unwrap_err();

    assert_eq!(fe.ui().errors.len(), 1);
    assert!(fe.ui().errors[0].contains("quota exceeded"));
}

#[tokio::test]
async fn test_unload_reports_both_save_and_push_failures() {
    let (mut fe, _) = playing("zelda.gb", MemoryStore::new()).await;
    fe.module_mut().unwrap().fail_save = true;
    fe.store_mut().fail_push = true;

    fe.handle(Event::BeforeUnload).await.unwrap_err();

    let errors = &fe.ui().errors;
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("save RAM unavailable"));
    assert!(errors[1].contains("quota exceeded"));
}

#[tokio::test]
async fn test_buttons_pressed_during_play() {
    let (mut fe, _) = playing("zelda.gb", MemoryStore::new()).await;

    fe.handle(Event::ButtonEnter(Button::Start)).await.unwrap();
    fe.handle(Event::ButtonEnter(Button::Right)).await.unwrap();
    fe.handle(Event::VisibilityChanged(Visibility::Hidden))
        .await
        .unwrap();

    assert_eq!(
        fe.ui().keys,
        vec![
            KeyEvent::down(Button::Start),
            KeyEvent::down(Button::Right),
            KeyEvent::up(Button::Start),
            KeyEvent::up(Button::Right),
        ]
    );
}
