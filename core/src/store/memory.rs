use std::cell::RefCell;
use std::rc::Rc;

use super::{DurableStore, StoreError};
use crate::vfs::Entries;

#[derive(Debug, Default)]
struct Inner {
    entries: Entries,
    pushes: usize,
}

/// In-memory durable store.
///
/// Clones share one backing map, so a second frontend built from a clone sees
/// what the first one pushed (a page reload, in effect).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`, as if pushed by an earlier session.
    pub fn with_entries(entries: Entries) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner { entries, pushes: 0 })),
        }
    }

    /// Copy of the persisted entries.
    pub fn entries(&self) -> Entries {
        self.inner.borrow().entries.clone()
    }

    /// Number of completed pushes.
    pub fn push_count(&self) -> usize {
        self.inner.borrow().pushes
    }
}

#[async_trait::async_trait(?Send)]
impl DurableStore for MemoryStore {
    async fn pull(&mut self) -> Result<Entries, StoreError> {
        Ok(self.inner.borrow().entries.clone())
    }

    async fn push(&mut self, entries: &Entries) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        inner.entries = entries.clone();
        inner.pushes += 1;
        Ok(())
    }
}
