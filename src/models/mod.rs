pub mod entry;
pub mod entry_input;

pub use entry::{Entry, EntryDraft, EntryType, WeekBucket};
pub use entry_input::{EntryInput, EntryMutationResponse};
