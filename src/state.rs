use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::config::AppConfig;
use crate::foods::repo::{FoodStore, PgFoodStore};
use crate::history::repo::{HistoryStore, PgHistoryStore};
use crate::profile::repo::{PgProfileStore, ProfileStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub foods: Arc<dyn FoodStore>,
    pub profiles: Arc<dyn ProfileStore>,
    pub history: Arc<dyn HistoryStore>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to postgres")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        Ok(Self::from_parts(
            config,
            Arc::new(PgFoodStore::new(db.clone())),
            Arc::new(PgProfileStore::new(db.clone())),
            Arc::new(PgHistoryStore::new(db)),
        ))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        foods: Arc<dyn FoodStore>,
        profiles: Arc<dyn ProfileStore>,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        Self {
            config,
            foods,
            profiles,
            history,
        }
    }
}
