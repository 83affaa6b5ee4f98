use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::{
    models::{Entry, EntryDraft},
    AppError, AppResult,
};

use super::EntryStore;

/// In-memory entry store backing the test suite and database-free local
/// runs. One mutex guards the whole map; every operation takes the lock
/// once, which makes each call atomic. The id counter only ever counts up,
/// so deleted ids stay retired.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    entries: BTreeMap<i64, Entry>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> AppResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("entry store lock poisoned".to_string()))
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Entry>> {
        let inner = self.locked()?;
        Ok(inner.entries.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> AppResult<Entry> {
        let inner = self.locked()?;
        inner
            .entries
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Entry {} not found", id)))
    }

    async fn create(&self, draft: EntryDraft) -> AppResult<Entry> {
        let mut inner = self.locked()?;

        inner.next_id += 1;
        let entry = Entry {
            id: inner.next_id,
            date: draft.date,
            kind: draft.kind,
            text: draft.text,
        };
        inner.entries.insert(entry.id, entry.clone());

        Ok(entry)
    }

    async fn update(&self, id: i64, draft: EntryDraft) -> AppResult<Entry> {
        let mut inner = self.locked()?;

        let entry = inner
            .entries
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Entry {} not found", id)))?;

        entry.date = draft.date;
        entry.kind = draft.kind;
        entry.text = draft.text;

        Ok(entry.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut inner = self.locked()?;

        if inner.entries.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("Entry {} not found", id)));
        }

        Ok(())
    }
}
