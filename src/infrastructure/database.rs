//! Pooled SQLite connection

use crate::config::Config;
use crate::error::Result;
use di::{Ref, inject, injectable};
use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::ops::Deref;

pub struct DatabaseConnection {
    connection: SqlitePool,
}

#[injectable]
impl DatabaseConnection {
    #[inject]
    pub fn create(config: Ref<Config>) -> DatabaseConnection {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(config.database.clone());

        DatabaseConnection { connection: pool }
    }
}

impl DatabaseConnection {
    pub fn from_pool(connection: SqlitePool) -> DatabaseConnection {
        DatabaseConnection { connection }
    }

    /// Creates the `users`, `groups` and `messages` tables if they are missing.
    ///
    /// Safe to call on every start, already applied migrations are skipped.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::migrate!().run(&self.connection).await?;
        info!("Database schema ready");
        Ok(())
    }
}

impl Deref for DatabaseConnection {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}
