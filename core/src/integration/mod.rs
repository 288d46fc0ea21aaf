//! Integration tests for the gbweb front-end
//!
//! Tests full upload → play → persist → download cycles, restoring a session
//! after a reload, and event routing through `Frontend::handle`.

#[cfg(test)]
mod event_tests;

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::config::Config;
    use crate::store::MemoryStore;
    use crate::test_utils::{FakeFile, Journal, TestFrontend, frontend_with};
    use crate::ui::Slot;

    /// Bytes of a tiny fake cartridge.
    pub fn rom_bytes() -> Vec<u8> {
        let mut rom = vec![0u8; 0x150];
        rom[0x134..0x139].copy_from_slice(b"ZELDA");
        rom
    }

    /// Started frontend over `store` with `name` uploaded and loaded.
    pub async fn playing(name: &str, store: MemoryStore) -> (TestFrontend, Journal) {
        let (mut fe, journal, _) = frontend_with(Config::default(), store);
        fe.start().await.unwrap();
        fe.bind_file(Some(FakeFile::new(name, rom_bytes())), Slot::Rom)
            .await
            .unwrap();
        fe.load().unwrap();
        (fe, journal)
    }
}
