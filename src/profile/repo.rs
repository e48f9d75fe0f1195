use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{ProfileRow, ProfileUpdate, UserProfile};

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>>;
    /// Inserts or replaces the profile; `created_at` survives updates.
    async fn upsert(&self, update: ProfileUpdate) -> anyhow::Result<UserProfile>;
}

#[derive(Clone)]
pub struct PgProfileStore {
    db: PgPool,
}

impl PgProfileStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn find(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT user_id, first_name, last_name, age, sex, height_cm, weight_kg,
                   activity_level, daily_calories, daily_carbs, daily_protein, daily_fat,
                   created_at, updated_at
              FROM user_profiles
             WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .context("find profile")?;

        row.map(UserProfile::try_from).transpose()
    }

    async fn upsert(&self, update: ProfileUpdate) -> anyhow::Result<UserProfile> {
        let ProfileUpdate {
            user_id,
            first_name,
            last_name,
            health,
            targets,
        } = update;

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO user_profiles (
                user_id, first_name, last_name, age, sex, height_cm, weight_kg,
                activity_level, daily_calories, daily_carbs, daily_protein, daily_fat
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (user_id) DO UPDATE SET
                first_name = COALESCE(EXCLUDED.first_name, user_profiles.first_name),
                last_name = COALESCE(EXCLUDED.last_name, user_profiles.last_name),
                age = EXCLUDED.age,
                sex = EXCLUDED.sex,
                height_cm = EXCLUDED.height_cm,
                weight_kg = EXCLUDED.weight_kg,
                activity_level = EXCLUDED.activity_level,
                daily_calories = EXCLUDED.daily_calories,
                daily_carbs = EXCLUDED.daily_carbs,
                daily_protein = EXCLUDED.daily_protein,
                daily_fat = EXCLUDED.daily_fat,
                updated_at = now()
            RETURNING user_id, first_name, last_name, age, sex, height_cm, weight_kg,
                      activity_level, daily_calories, daily_carbs, daily_protein, daily_fat,
                      created_at, updated_at
            "#,
        )
        .bind(&user_id)
        .bind(first_name)
        .bind(last_name)
        .bind(i32::try_from(health.age)?)
        .bind(health.sex.as_str())
        .bind(health.height_cm)
        .bind(health.weight_kg)
        .bind(health.activity_level.as_str())
        .bind(targets.calories)
        .bind(targets.carbs_grams)
        .bind(targets.protein_grams)
        .bind(targets.fat_grams)
        .fetch_one(&self.db)
        .await
        .with_context(|| format!("upsert profile {user_id}"))?;

        UserProfile::try_from(row)
    }
}
