use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{FoodRecord, FoodRow};

#[async_trait]
pub trait FoodStore: Send + Sync {
    /// Every food record, in insertion order.
    async fn all_foods(&self) -> anyhow::Result<Vec<FoodRecord>>;
}

#[derive(Clone)]
pub struct PgFoodStore {
    db: PgPool,
}

impl PgFoodStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FoodStore for PgFoodStore {
    async fn all_foods(&self) -> anyhow::Result<Vec<FoodRecord>> {
        let rows = sqlx::query_as::<_, FoodRow>(
            r#"
            SELECT id, name, other_names, num_calories, digestion_time, time_to_eat,
                   digestion_complexity, additional_digestion_notes,
                   benefits, cautions, nutrient_breakdown
              FROM foods
             ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list foods")?;

        Ok(rows.into_iter().map(FoodRecord::from).collect())
    }
}
