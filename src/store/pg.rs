use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    models::{Entry, EntryDraft, EntryType},
    AppError, AppResult,
};

use super::EntryStore;

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(25)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(600))
        .connect(database_url)
        .await
}

/// Postgres-backed entry store over the table
///
/// ```sql
/// CREATE TABLE "Entry" (
///     id   BIGSERIAL PRIMARY KEY,
///     date DATE NOT NULL,
///     type TEXT NOT NULL,
///     text TEXT NOT NULL
/// );
/// ```
///
/// `BIGSERIAL` keeps ids monotonic; a deleted id is never handed out again.
pub struct PgEntryStore {
    pool: PgPool,
}

impl PgEntryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type EntryRow = (i64, NaiveDate, String, String);

fn entry_from_row((id, date, kind, text): EntryRow) -> AppResult<Entry> {
    let kind = EntryType::parse(&kind)
        .ok_or_else(|| AppError::Internal(format!("entry {} has unknown type {:?}", id, kind)))?;

    Ok(Entry {
        id,
        date,
        kind,
        text,
    })
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn list(&self) -> AppResult<Vec<Entry>> {
        let rows = sqlx::query_as::<_, EntryRow>(
            r#"SELECT id, date, type, text FROM "Entry" ORDER BY date, id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(entry_from_row).collect()
    }

    async fn get(&self, id: i64) -> AppResult<Entry> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"SELECT id, date, type, text FROM "Entry" WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Entry {} not found", id)))?;

        entry_from_row(row)
    }

    async fn create(&self, draft: EntryDraft) -> AppResult<Entry> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            INSERT INTO "Entry" (date, type, text)
            VALUES ($1, $2, $3)
            RETURNING id, date, type, text
            "#,
        )
        .bind(draft.date)
        .bind(draft.kind.as_str())
        .bind(&draft.text)
        .fetch_one(&self.pool)
        .await?;

        entry_from_row(row)
    }

    async fn update(&self, id: i64, draft: EntryDraft) -> AppResult<Entry> {
        let row = sqlx::query_as::<_, EntryRow>(
            r#"
            UPDATE "Entry"
            SET date = $1, type = $2, text = $3
            WHERE id = $4
            RETURNING id, date, type, text
            "#,
        )
        .bind(draft.date)
        .bind(draft.kind.as_str())
        .bind(&draft.text)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Entry {} not found", id)))?;

        entry_from_row(row)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(r#"DELETE FROM "Entry" WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Entry {} not found", id)));
        }

        Ok(())
    }
}
