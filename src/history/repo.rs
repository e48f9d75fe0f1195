use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;

use super::repo_types::{HistoryEntry, HistoryRow, NewHistoryEntry};

#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn insert(&self, entry: NewHistoryEntry) -> anyhow::Result<HistoryEntry>;

    /// Entries with `from <= created_at < to`, newest first. Open bounds are
    /// unbounded.
    async fn list_between(
        &self,
        user_id: &str,
        from: Option<OffsetDateTime>,
        to: Option<OffsetDateTime>,
        limit: Option<i64>,
    ) -> anyhow::Result<Vec<HistoryEntry>>;
}

#[derive(Clone)]
pub struct PgHistoryStore {
    db: PgPool,
}

impl PgHistoryStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn insert(&self, entry: NewHistoryEntry) -> anyhow::Result<HistoryEntry> {
        let row = sqlx::query_as::<_, HistoryRow>(
            r#"
            INSERT INTO food_history (
                id, user_id, name, calories, carbs, protein, fat,
                portion_multiplier, meal_type, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, user_id, name, calories, carbs, protein, fat,
                      portion_multiplier, meal_type, notes, created_at
            "#,
        )
        .bind(uuid::Uuid::new_v4())
        .bind(&entry.user_id)
        .bind(&entry.name)
        .bind(entry.calories)
        .bind(entry.carbs)
        .bind(entry.protein)
        .bind(entry.fat)
        .bind(entry.portion_multiplier)
        .bind(entry.meal_type.map(|m| m.as_str()))
        .bind(&entry.notes)
        .fetch_one(&self.db)
        .await
        .with_context(|| format!("insert history for {}", entry.user_id))?;

        HistoryEntry::try_from(row)
    }

    async fn list_between(
        &self,
        user_id: &str,
        from: Option<OffsetDateTime>,
        to: Option<OffsetDateTime>,
        limit: Option<i64>,
    ) -> anyhow::Result<Vec<HistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT id, user_id, name, calories, carbs, protein, fat,
                   portion_multiplier, meal_type, notes, created_at
              FROM food_history
             WHERE user_id = $1
               AND ($2::timestamptz IS NULL OR created_at >= $2)
               AND ($3::timestamptz IS NULL OR created_at < $3)
             ORDER BY created_at DESC
             LIMIT $4
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .context("list history")?;

        rows.into_iter().map(HistoryEntry::try_from).collect()
    }
}
