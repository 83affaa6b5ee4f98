use std::sync::Arc;

use crate::{
    models::{Entry, EntryInput, WeekBucket},
    store::EntryStore,
    AppError, AppResult,
};

use super::{validate, week};

/// Orchestrates validator, store and aggregator. The store is injected at
/// construction; there is no ambient database handle. Mutations are gated by
/// the caller-supplied `is_authorized` capability, reads are public.
#[derive(Clone)]
pub struct EntryService {
    store: Arc<dyn EntryStore>,
}

impl EntryService {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// All entries grouped into week buckets, oldest week first.
    pub async fn list_grouped_by_week(&self) -> AppResult<Vec<WeekBucket>> {
        let entries = self.store.list().await?;
        Ok(week::aggregate(&entries))
    }

    /// Single entry lookup, used by the edit screen.
    pub async fn entry(&self, id: i64) -> AppResult<Entry> {
        self.store.get(id).await
    }

    pub async fn create_entry(&self, is_authorized: bool, input: &EntryInput) -> AppResult<Entry> {
        self.require_owner(is_authorized)?;

        let draft = validate::validate(input)?;
        let entry = self.store.create(draft).await?;

        tracing::info!(id = entry.id, kind = entry.kind.as_str(), "Entry created");
        Ok(entry)
    }

    // Checks run as authorization, then existence, then validation.
    pub async fn update_entry(
        &self,
        is_authorized: bool,
        id: i64,
        input: &EntryInput,
    ) -> AppResult<Entry> {
        self.require_owner(is_authorized)?;
        self.store.get(id).await?;

        let draft = validate::validate(input)?;
        let entry = self.store.update(id, draft).await?;

        tracing::info!(id, "Entry updated");
        Ok(entry)
    }

    pub async fn delete_entry(&self, is_authorized: bool, id: i64) -> AppResult<()> {
        self.require_owner(is_authorized)?;
        self.store.delete(id).await?;

        tracing::info!(id, "Entry deleted");
        Ok(())
    }

    fn require_owner(&self, is_authorized: bool) -> AppResult<()> {
        if !is_authorized {
            return Err(AppError::Unauthorized("Not authenticated".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryType;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn service() -> EntryService {
        EntryService::new(Arc::new(MemoryStore::new()))
    }

    fn input(date: &str, kind: &str, text: &str) -> EntryInput {
        EntryInput {
            date: date.to_string(),
            kind: kind.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn created_entry_round_trips_through_get() {
        let svc = service();

        let created = svc
            .create_entry(true, &input("2024-01-08", "work", "shipped the importer"))
            .await
            .unwrap();
        let fetched = svc.entry(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(fetched.kind, EntryType::Work);
        assert_eq!(fetched.text, "shipped the importer");
    }

    #[tokio::test]
    async fn unauthorized_create_persists_nothing() {
        let svc = service();

        let err = svc
            .create_entry(false, &input("2024-01-08", "work", "A"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unauthorized(_)));
        assert!(svc.list_grouped_by_week().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_payload_persists_nothing() {
        let svc = service();

        let err = svc
            .create_entry(true, &input("2024-01-08", "workk", "A"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { field: "type", .. }));
        assert!(svc.list_grouped_by_week().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_the_full_payload() {
        let svc = service();

        let created = svc
            .create_entry(true, &input("2024-01-08", "work", "draft"))
            .await
            .unwrap();
        let updated = svc
            .update_entry(true, created.id, &input("2024-01-09", "learning", "final"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
        assert_eq!(updated.kind, EntryType::Learning);
        assert_eq!(updated.text, "final");
    }

    #[tokio::test]
    async fn update_after_delete_is_not_found() {
        let svc = service();

        let created = svc
            .create_entry(true, &input("2024-01-08", "work", "A"))
            .await
            .unwrap();
        svc.delete_entry(true, created.id).await.unwrap();

        let err = svc
            .update_entry(true, created.id, &input("2024-01-09", "work", "B"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let svc = service();

        let created = svc
            .create_entry(true, &input("2024-01-08", "work", "A"))
            .await
            .unwrap();

        svc.delete_entry(true, created.id).await.unwrap();
        let err = svc.delete_entry(true, created.id).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn authorization_is_checked_before_existence() {
        let svc = service();

        let err = svc
            .update_entry(false, 42, &input("2024-01-08", "work", "A"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn existence_is_checked_before_validation() {
        let svc = service();

        // Payload is invalid on every field, but the unknown id wins
        let err = svc
            .update_entry(true, 42, &input("not-a-date", "workk", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn listing_groups_entries_into_ascending_weeks() {
        let svc = service();

        svc.create_entry(true, &input("2024-01-15", "work", "C"))
            .await
            .unwrap();
        svc.create_entry(true, &input("2024-01-08", "work", "A"))
            .await
            .unwrap();
        svc.create_entry(true, &input("2024-01-10", "learning", "B"))
            .await
            .unwrap();

        let weeks = svc.list_grouped_by_week().await.unwrap();

        assert_eq!(weeks.len(), 2);
        assert_eq!(
            weeks[0].monday,
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
        assert_eq!(
            weeks[1].monday,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(weeks[0].work.len(), 1);
        assert_eq!(weeks[0].learnings.len(), 1);
        assert_eq!(weeks[1].work.len(), 1);
    }
}
