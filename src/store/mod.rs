pub mod memory;
pub mod pg;

pub use memory::MemoryStore;
pub use pg::{create_pool, PgEntryStore};

use async_trait::async_trait;

use crate::{
    models::{Entry, EntryDraft},
    AppResult,
};

/// CRUD persistence for journal entries, keyed by store-assigned id.
///
/// Implementations guarantee that each call is atomic (no partial write is
/// ever observable), that `create` hands out a fresh monotonic id, and that
/// a deleted id is never assigned again. `list` carries no ordering
/// contract; callers impose their own.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Entry>>;

    async fn get(&self, id: i64) -> AppResult<Entry>;

    async fn create(&self, draft: EntryDraft) -> AppResult<Entry>;

    /// Full replace of the editable fields.
    async fn update(&self, id: i64, draft: EntryDraft) -> AppResult<Entry>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}
